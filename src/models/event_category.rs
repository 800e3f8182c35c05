use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of known categories; must match `EventCategory::ALL`.
pub const CATEGORY_COUNT: usize = 12;

/// The closed set of known day annotations.
///
/// This is configuration, not derived data: the indicator expansion, the
/// export headers, and the summary grouping all iterate `ALL`, so adding a
/// category is a change here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    WorkFromHome,
    PostWorkCommitment,
    PreWorkCommitment,
    Lecture16,
    Lecture14,
    Lecture11,
    AnnualLeave,
    SickLeave,
    StudyLeave,
    PublicHoliday,
    Conference,
    Standard,
}

impl EventCategory {
    /// Declaration order doubles as discriminant order; `as usize` indexes
    /// into `EventFlags`.
    pub const ALL: [EventCategory; CATEGORY_COUNT] = [
        EventCategory::WorkFromHome,
        EventCategory::PostWorkCommitment,
        EventCategory::PreWorkCommitment,
        EventCategory::Lecture16,
        EventCategory::Lecture14,
        EventCategory::Lecture11,
        EventCategory::AnnualLeave,
        EventCategory::SickLeave,
        EventCategory::StudyLeave,
        EventCategory::PublicHoliday,
        EventCategory::Conference,
        EventCategory::Standard,
    ];

    /// Canonical token as produced by the notes normalizer.
    pub fn token(&self) -> &'static str {
        match self {
            EventCategory::WorkFromHome => "Work_from_home",
            EventCategory::PostWorkCommitment => "Post_Work_Commitment",
            EventCategory::PreWorkCommitment => "Pre_Work_Commitment",
            EventCategory::Lecture16 => "16_00_lecture",
            EventCategory::Lecture14 => "14_00_lecture",
            EventCategory::Lecture11 => "11_00_lecture",
            EventCategory::AnnualLeave => "Annual_leave",
            EventCategory::SickLeave => "Sick_leave",
            EventCategory::StudyLeave => "Study_leave",
            EventCategory::PublicHoliday => "Public_Holiday",
            EventCategory::Conference => "Conference",
            EventCategory::Standard => "Standard",
        }
    }

    /// Column name carried by the exported tidy table.
    pub fn column(&self) -> String {
        format!("event_{}", self.token())
    }

    /// Canonical token → category. Unknown tokens return None; the expander
    /// treats them as matching no category rather than failing.
    pub fn from_token(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.token() == s)
    }
}

/// One boolean per category: the accumulator for the OR-reduction that
/// collapses exploded rows back to day granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFlags([bool; CATEGORY_COUNT]);

impl EventFlags {
    /// Indicator vector for a single token: at most one category set,
    /// all false when the token is unknown.
    pub fn from_token(token: &str) -> Self {
        let mut flags = Self::default();
        if let Some(cat) = EventCategory::from_token(token) {
            flags.set(cat, true);
        }
        flags
    }

    pub fn get(&self, cat: EventCategory) -> bool {
        self.0[cat as usize]
    }

    pub fn set(&mut self, cat: EventCategory, value: bool) {
        self.0[cat as usize] = value;
    }

    pub fn or_assign(&mut self, other: &EventFlags) {
        for (dst, src) in self.0.iter_mut().zip(other.0.iter()) {
            *dst |= *src;
        }
    }

    /// Categories currently set, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = EventCategory> + '_ {
        EventCategory::ALL.into_iter().filter(|c| self.get(*c))
    }
}

impl Serialize for EventFlags {
    /// Serializes as one `event_*` boolean entry per category so a flattened
    /// tidy record matches the exported table shape.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for cat in EventCategory::ALL {
            map.serialize_entry(&cat.column(), &self.get(cat))?;
        }
        map.end()
    }
}
