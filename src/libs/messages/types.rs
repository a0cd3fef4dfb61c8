#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === AUTHORIZATION MESSAGES ===
    NotAuthenticated,
    AccountInactive,
    AdminRequired,

    // === PERIOD MESSAGES ===
    UnknownPeriod(String),
    MissingCustomDates,

    // === TIME ENTRY MESSAGES ===
    EmptyTaskName,
    NegativeHours,

    // === REPORT FILTER MESSAGES ===
    UnknownFilterField(String),
    InvalidCustomerFilter(String),
    InvalidStateFilter(String),
    InvalidHoursFilter(String),
    InvalidDateFilter(String),

    // === AUDIT MESSAGES ===
    TransactionLogFailed(String),
}

impl Message {
    /// Stable localization token for the message.
    ///
    /// The UI layer resolves these keys against its locale catalog; the
    /// `Display` text is only the default English rendering.
    pub fn key(&self) -> &'static str {
        match self {
            Message::NotAuthenticated => "auth.not_authenticated",
            Message::AccountInactive => "auth.account_inactive",
            Message::AdminRequired => "auth.admin_required",
            Message::UnknownPeriod(_) => "period.unknown",
            Message::MissingCustomDates => "period.missing_custom_dates",
            Message::EmptyTaskName => "time_entry.empty_task",
            Message::NegativeHours => "time_entry.negative_hours",
            Message::UnknownFilterField(_) => "filter.unknown_field",
            Message::InvalidCustomerFilter(_) => "filter.invalid_customer",
            Message::InvalidStateFilter(_) => "filter.invalid_state",
            Message::InvalidHoursFilter(_) => "filter.invalid_hours",
            Message::InvalidDateFilter(_) => "filter.invalid_date",
            Message::TransactionLogFailed(_) => "audit.log_failed",
        }
    }
}
