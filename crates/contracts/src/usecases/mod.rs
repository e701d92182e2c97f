pub mod u501_service_intake;
