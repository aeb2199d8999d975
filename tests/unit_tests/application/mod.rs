mod document_service_test;
