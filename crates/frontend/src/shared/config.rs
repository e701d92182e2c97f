/// Catalog data file, relative to the page
pub const CATALOG_URL: &str = "data.json";

/// Page that receives the intake query string
pub const REDIRECT_PAGE: &str = "service.html";
