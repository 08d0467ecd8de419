/// which traversal of the path `progress` (over the whole slider) falls in
pub fn repeat_at(progress: f64, repeat_count: u32) -> u32 {
    (progress * repeat_count as f64) as u32
}

/// turn progress over the whole slider into progress along the path.
/// odd repeats run backwards, so the result bounces between 0 and 1
pub fn progress_at(progress: f64, repeat_count: u32) -> f64 {
    let p = progress * repeat_count as f64 % 1.0;
    if repeat_at(progress, repeat_count) % 2 == 1 {
        1.0 - p
    } else {
        p
    }
}
