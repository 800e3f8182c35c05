/// One input line exactly as read from the timesheet file.
/// All fields are raw text; typing happens in the normalizer so that a
/// malformed cell can be reported with its row position.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub date_text: String,
    pub clock_in_text: Option<String>,
    pub clock_out_text: Option<String>,
    pub notes_text: Option<String>,
}
