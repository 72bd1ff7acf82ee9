use humansize::BINARY;

/// Format size in human-readable format
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, BINARY)
}
