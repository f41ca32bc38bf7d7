/// Moves `index` one place through a list of `len` items, wrapping at both ends.
pub const fn wrap_index(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }

    if forward {
        (index + 1) % len
    } else if index == 0 || index >= len {
        len - 1
    } else {
        index - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        assert_eq!(wrap_index(2, 3, true), 0);
        assert_eq!(wrap_index(0, 3, false), 2);
        assert_eq!(wrap_index(1, 3, false), 0);
        assert_eq!(wrap_index(0, 0, true), 0);
    }
}
