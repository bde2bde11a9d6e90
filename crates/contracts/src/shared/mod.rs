pub mod api_response;
pub mod i18n;
