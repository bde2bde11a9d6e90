//! UI strings for the log viewer.
//!
//! Keys are the English texts themselves, so an unknown key, or one a
//! locale does not translate, is shown as is.

pub mod keys {
    pub const LOG_DETAILS: &str = "Log details";
    pub const REQUEST_CONTENT: &str = "Request content";
    pub const RESPONSE_CONTENT: &str = "Response content";
    pub const NO_CONTENT_RECORDED: &str = "No content recorded";
    pub const LOAD_FAILED: &str = "Load failed";
    pub const LOAD_FAILED_PREFIX: &str = "Load failed: ";
    pub const LOG_ID: &str = "Log ID";
    pub const SHOW_CONTENT: &str = "Show content";
    pub const ENTER_LOG_ID: &str = "Enter a numeric log ID";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("ru") {
            Locale::Ru
        } else {
            Locale::En
        }
    }

    pub fn translate(self, key: &str) -> String {
        let translated = match self {
            Locale::En => None,
            Locale::Ru => russian(key),
        };
        translated.unwrap_or(key).to_string()
    }
}

fn russian(key: &str) -> Option<&'static str> {
    let text = match key {
        keys::LOG_DETAILS => "Детали лога",
        keys::REQUEST_CONTENT => "Содержимое запроса",
        keys::RESPONSE_CONTENT => "Содержимое ответа",
        keys::NO_CONTENT_RECORDED => "Содержимое не записано",
        keys::LOAD_FAILED => "Ошибка загрузки",
        keys::LOAD_FAILED_PREFIX => "Ошибка загрузки: ",
        keys::LOG_ID => "ID лога",
        keys::SHOW_CONTENT => "Показать содержимое",
        keys::ENTER_LOG_ID => "Введите числовой ID лога",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_falls_back_to_key() {
        assert_eq!(Locale::En.translate(keys::LOAD_FAILED), "Load failed");
        assert_eq!(Locale::Ru.translate(keys::LOAD_FAILED), "Ошибка загрузки");
        assert_eq!(Locale::Ru.translate("Something else"), "Something else");
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("ru-RU"), Locale::Ru);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }
}
