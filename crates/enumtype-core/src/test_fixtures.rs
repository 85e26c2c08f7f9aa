use enumtype_derive::EnumKind;

///
/// Status
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, Hash, PartialEq)]
#[enum_kind(path = "test::Status")]
pub(crate) enum Status {
    Active,
    Closed,
}

///
/// Priority
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, Hash, PartialEq)]
#[enum_kind(path = "test::Priority")]
pub(crate) enum Priority {
    #[enum_value(label = "Low")]
    Low,
    #[enum_value(label = "High")]
    High,
    #[enum_value(label = "In progress")]
    InProgress,
}

///
/// Channel
/// one key contains the default separator
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, Hash, PartialEq)]
#[enum_kind(path = "test::Channel")]
pub(crate) enum Channel {
    #[enum_value(key = "mail::inbox")]
    Inbox,
    Sms,
}
