mod extraction_service_test;
