//! Pure builders for the two YouTube URL forms the app hands out.

/// Embeddable player URL, parameterized by a start offset in seconds.
pub fn embed_url(video_id: &str, start: u64) -> String {
    format!("https://www.youtube.com/embed/{video_id}?start={start}")
}

/// Watch-page URL with the offset in YouTube's `<M>m<S>s` form.
pub fn watch_url(video_id: &str, start: u64) -> String {
    let minutes = start / 60;
    let seconds = start % 60;
    format!("https://www.youtube.com/watch?v={video_id}&t={minutes}m{seconds}s")
}
