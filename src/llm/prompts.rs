/// System instruction sent with every extraction request.
///
/// The transcript itself goes verbatim into the user turn.
pub const SYSTEM_PROMPT: &str =
    "You are an expert meeting assistant. Your goal is to extract key information from the user's input.";
