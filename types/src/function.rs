//! PostgreSQL functions usable as column defaults

use std::borrow::Cow;

/// A SQL function call rendered verbatim after `DEFAULT`
///
/// Well-known functions are provided as constants; anything else can be
/// wrapped with [`SqlFunction::new`].
///
/// ```
/// use ddlkit_types::SqlFunction;
///
/// assert_eq!(SqlFunction::UUID_GENERATE_V4.as_str(), "uuid_generate_v4()");
/// assert_eq!(SqlFunction::new("now()").to_string(), "now()");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SqlFunction(Cow<'static, str>);

impl SqlFunction {
    pub const CURRENT_TIMESTAMP: Self = Self(Cow::Borrowed("current_timestamp"));
    pub const CURRENT_DATE: Self = Self(Cow::Borrowed("current_date"));
    pub const CURRENT_TIME: Self = Self(Cow::Borrowed("current_time"));
    pub const UUID_GENERATE_V4: Self = Self(Cow::Borrowed("uuid_generate_v4()"));

    /// Wrap an arbitrary function call
    #[must_use]
    pub fn new(call: impl Into<Cow<'static, str>>) -> Self {
        Self(call.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SqlFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for SqlFunction {
    fn from(call: &'static str) -> Self {
        Self::new(call)
    }
}
