//! Wrap-around selection shared by the list and table screens

pub fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        Some(i) if i + 1 < len => Some(i + 1),
        _ => Some(0),
    }
}

pub fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        Some(0) => Some(len - 1),
        Some(i) => Some(i.min(len) - 1),
        None => Some(0),
    }
}

/// Keep a selection valid after the underlying rows changed
pub fn clamp_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(selected.unwrap_or(0).min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        assert_eq!(next_index(Some(2), 3), Some(0));
        assert_eq!(next_index(Some(0), 3), Some(1));
        assert_eq!(previous_index(Some(0), 3), Some(2));
        assert_eq!(previous_index(Some(2), 3), Some(1));
        assert_eq!(next_index(None, 0), None);
    }

    #[test]
    fn test_clamp_after_removal() {
        assert_eq!(clamp_index(Some(2), 2), Some(1));
        assert_eq!(clamp_index(Some(0), 0), None);
        assert_eq!(clamp_index(None, 4), Some(0));
    }
}
