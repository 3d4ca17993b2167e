pub mod interface;
pub mod handler;
pub mod google;
pub mod factory;

pub use interface::{TranslateError, TranslateRequest, TranslatorInterface};
pub use google::GoogleTranslateClient;
pub use factory::TranslatorFactory;
