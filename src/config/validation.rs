use thiserror::Error;

/// 配置驗證錯誤
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("缺少必要配置項: {0}")]
    MissingField(String),

    #[error("無效的配置值: {0}")]
    InvalidValue(String),

    #[error("配置範圍錯誤: {field} 的值 {value} 不在範圍 {min}..{max} 內")]
    RangeError {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("依賴錯誤: {dependent} 依賴於 {dependency} 的配置")]
    DependencyError {
        dependent: String,
        dependency: String,
    },
}

/// 配置驗證器trait
pub trait Validator {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// 驗證工具函數
pub struct ValidationUtils;

impl ValidationUtils {
    /// 數值必須落在 `min..=max`
    pub fn in_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + ToString,
    {
        if value < min || value > max {
            return Err(ValidationError::RangeError {
                field: field_name.to_string(),
                value: value.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(())
    }

    /// 值必須是選項之一，不分大小寫
    pub fn one_of(value: &str, options: &[&str], field_name: &str) -> Result<(), ValidationError> {
        if options.iter().any(|option| option.eq_ignore_ascii_case(value)) {
            return Ok(());
        }
        Err(ValidationError::InvalidValue(format!(
            "{} 的值 {} 不是有效選項: {}",
            field_name,
            value,
            options.join(", ")
        )))
    }

    /// 字串欄位不可為空白
    pub fn not_empty(value: &str, field_name: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field_name.to_string()));
        }
        Ok(())
    }

    /// 連線字串必須以其中一個協定開頭，且協定之後還有主機部分
    pub fn url_scheme(value: &str, schemes: &[&str], field_name: &str) -> Result<(), ValidationError> {
        Self::not_empty(value, field_name)?;

        let has_host = schemes.iter().any(|scheme| {
            value
                .strip_prefix(scheme)
                .and_then(|rest| rest.strip_prefix("://"))
                .is_some_and(|rest| !rest.is_empty())
        });
        if has_host {
            return Ok(());
        }

        let expected = schemes
            .iter()
            .map(|scheme| format!("{}://", scheme))
            .collect::<Vec<_>>()
            .join(" 或 ");
        Err(ValidationError::InvalidValue(format!(
            "{} 必須以 {} 開頭: {}",
            field_name, expected, value
        )))
    }

    /// CORS 來源只接受 `*` 或 http(s) 來源
    pub fn cors_origins(origins: &[String], field_name: &str) -> Result<(), ValidationError> {
        for origin in origins {
            if origin == "*" {
                continue;
            }
            Self::url_scheme(origin, &["http", "https"], field_name)?;
        }
        Ok(())
    }

    /// 啟用 `dependent` 時 `dependency` 必須已設定
    pub fn check_dependency(
        has_dependent: bool,
        has_dependency: bool,
        dependent_name: &str,
        dependency_name: &str,
    ) -> Result<(), ValidationError> {
        if has_dependent && !has_dependency {
            return Err(ValidationError::DependencyError {
                dependent: dependent_name.to_string(),
                dependency: dependency_name.to_string(),
            });
        }
        Ok(())
    }
}
