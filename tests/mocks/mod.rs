pub mod dealer_api_mock;
