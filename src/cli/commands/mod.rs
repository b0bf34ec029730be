pub mod add;
pub mod backup;
pub mod chart;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod months;
pub mod session;
pub mod summary;
pub mod tips;

use crate::errors::AppResult;
use crate::models::month::YearMonth;

/// Parse an optional `--month` argument.
pub(crate) fn parse_month_arg(month: &Option<String>) -> AppResult<Option<YearMonth>> {
    month.as_deref().map(str::parse::<YearMonth>).transpose()
}
