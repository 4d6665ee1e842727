/// Counters accumulated over one walk; owned by the caller once returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkResult {
    /// Files whose content made it into the artifact.
    pub file_count: usize,
    /// Newline count + 1, summed over processed files.
    pub total_lines: usize,
    /// Heuristic token estimate, summed over processed files.
    pub total_tokens: usize,
}
