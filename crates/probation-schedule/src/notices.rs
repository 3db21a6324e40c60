//! Fixed caller-facing notices.

/// Main office line for escalations.
pub const OFFICE_PHONE: &str = "(901) 555-0199";

/// Walk-in fee, collected in cash.
pub const PAYMENT_AMOUNT: &str = "$75";

/// Instruction read to callers on a phone-reporting Friday.
pub fn friday_instruction() -> &'static str {
    "Phone reporting is active. Fridays are reserved for phone check-ins only. \
     Please leave a message or complete your phone report now. \
     No in-person appointments are available on Fridays."
}

/// Payment policy. Payment is never a condition for being seen.
pub fn payment_message() -> String {
    format!(
        "Payments are CASH ONLY ({}) and collected at the time of your appointment. \
         However, you are NOT required to have payment in order to be seen. \
         Please report regardless of your ability to pay.",
        PAYMENT_AMOUNT
    )
}

/// Referral for a caller whose number matches no active record.
pub fn unknown_caller_message() -> String {
    format!(
        "UNKNOWN CALLER. I'm sorry, I wasn't able to find your record with this phone number. \
         Please call our office directly at {} for assistance. \
         Our hours are Monday and Wednesday, 8 AM to 5 PM.",
        OFFICE_PHONE
    )
}
