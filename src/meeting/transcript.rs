//! Built-in transcript for the demo command.

/// Project Phoenix sync, used by `meeting-assistant demo`.
pub const SAMPLE_TRANSCRIPT: &str = "
Alex: Okay everyone, let's kick off the Project Phoenix sync. Sarah, can you give us the latest on the UI mockups?
Sarah: Yep. The design team has finalized the V2 mockups for the dashboard. I've uploaded them to Figma. John, I need you to review them by end of day tomorrow.
Alex: Great. John, is that feasible?
John: Yes, I'll get the feedback to you, Sarah, by tomorrow EOD. My main focus today is deploying the new authentication service. I'm aiming to get it live by 4 PM.
Alex: Perfect. That's a critical piece. One last thing, we need to decide on the new database. Maria, please schedule a meeting with the infra team for sometime next week to finalize the choice.
Sarah: Sounds good. I'll need the final decision before I can start on the V3 designs.
Alex: Understood. Okay, that's all for today. Let's keep the momentum going.
";
