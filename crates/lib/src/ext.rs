pub trait SliceExt<O> {
    /// Get two values out of a slice, assuming they are disjoint and in bounds.
    /// Else will return `None`.
    fn get_mut2(&mut self, a: usize, b: usize) -> Option<(&mut O, &mut O)>;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn get_mut2(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)> {
        if a == b || a.max(b) >= self.len() {
            return None;
        }

        if a < b {
            let (head, tail) = self.split_at_mut(b);
            Some((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.split_at_mut(a);
            Some((&mut tail[0], &mut head[b]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SliceExt;

    #[test]
    fn test_get_mut2() {
        let mut values = [1, 2, 3, 4];

        let (a, b) = values.get_mut2(3, 1).unwrap();
        std::mem::swap(a, b);
        assert_eq!(values, [1, 4, 3, 2]);

        assert!(values.get_mut2(2, 2).is_none());
        assert!(values.get_mut2(0, 4).is_none());
        assert!(values.get_mut2(7, 0).is_none());
    }
}
