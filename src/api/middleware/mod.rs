pub mod api_token;
