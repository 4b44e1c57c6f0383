//! Cartesian product over a runtime number of lists.

/// Iterates every combination that takes one element from each list.
///
/// Combinations are produced in odometer order: the last list varies fastest.
/// Any empty list yields no combinations; zero lists yield one empty
/// combination.
pub struct CartesianProduct<'a, T> {
    lists: &'a [Vec<T>],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T> CartesianProduct<'a, T> {
    pub fn new(lists: &'a [Vec<T>]) -> Self {
        Self {
            lists,
            indices: vec![0; lists.len()],
            done: lists.iter().any(Vec::is_empty),
        }
    }

    /// Number of combinations, saturating on overflow.
    pub fn total(lists: &[Vec<T>]) -> usize {
        lists
            .iter()
            .fold(1usize, |acc, list| acc.saturating_mul(list.len()))
    }

    fn advance(&mut self) {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.lists[position].len() {
                return;
            }
            self.indices[position] = 0;
        }
        self.done = true;
    }
}

impl<'a, T> Iterator for CartesianProduct<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let combination = self
            .indices
            .iter()
            .zip(self.lists)
            .map(|(&index, list)| &list[index])
            .collect();
        self.advance();
        Some(combination)
    }
}

/// Convenience constructor for [`CartesianProduct`].
pub fn cartesian_product<T>(lists: &[Vec<T>]) -> CartesianProduct<'_, T> {
    CartesianProduct::new(lists)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_list_varies_fastest() {
        let lists = vec![vec![1, 2], vec![10, 20, 30]];
        let combos: Vec<Vec<i32>> = cartesian_product(&lists)
            .map(|combo| combo.into_iter().copied().collect())
            .collect();

        assert_eq!(
            combos,
            vec![
                vec![1, 10],
                vec![1, 20],
                vec![1, 30],
                vec![2, 10],
                vec![2, 20],
                vec![2, 30],
            ]
        );
        assert_eq!(CartesianProduct::total(&lists), 6);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let lists = vec![vec![1], Vec::new(), vec![3]];
        assert_eq!(cartesian_product(&lists).count(), 0);
    }

    #[test]
    fn no_lists_yield_single_empty_combination() {
        let lists: Vec<Vec<u8>> = Vec::new();
        let combos: Vec<_> = cartesian_product(&lists).collect();
        assert_eq!(combos, vec![Vec::<&u8>::new()]);
    }

    #[test]
    fn arity_follows_input() {
        let lists = vec![vec!['a', 'b']; 5];
        assert_eq!(cartesian_product(&lists).count(), 32);
        assert!(cartesian_product(&lists).all(|combo| combo.len() == 5));
    }
}
