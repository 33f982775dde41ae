/// Computes every winning line for a square board of the given side
/// length: the rows, the columns, and the two diagonals, in that order.
/// Positions are 1-based and row-major. The ordering is fixed because
/// `Board::winner` and `Board::find_threatened_position` scan lines in
/// this order, and tests rely on it.
pub fn winning_lines(side_length: usize) -> Vec<Vec<usize>> {
    let rows = rows(side_length);
    let columns = columns(&rows);
    let diagonals = diagonals(side_length);

    let mut lines = rows;
    lines.extend(columns);
    lines.extend(diagonals);
    lines
}

fn rows(side_length: usize) -> Vec<Vec<usize>> {
    (1..=side_length * side_length)
        .collect::<Vec<usize>>()
        .chunks(side_length)
        .map(|chunk| chunk.to_vec())
        .collect()
}

fn columns(rows: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let side_length = rows.len();
    (0..side_length)
        .map(|col| (0..side_length).map(|row| rows[row][col]).collect())
        .collect()
}

fn diagonals(side_length: usize) -> Vec<Vec<usize>> {
    let main = (0..side_length)
        .map(|i| 1 + i * (side_length + 1))
        .collect();
    let anti = (0..side_length)
        .map(|i| side_length + i * (side_length - 1))
        .collect();
    vec![main, anti]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_is_two_n_plus_two() {
        for side_length in 3..=10 {
            let lines = winning_lines(side_length);
            assert_eq!(lines.len(), 2 * side_length + 2);
        }
    }

    #[test]
    fn test_every_line_has_n_distinct_positions_in_range() {
        for side_length in 3..=10 {
            let cell_count = side_length * side_length;
            for line in winning_lines(side_length) {
                assert_eq!(line.len(), side_length);
                let mut sorted = line.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), side_length);
                assert!(line.iter().all(|&p| (1..=cell_count).contains(&p)));
            }
        }
    }

    #[test]
    fn test_no_two_lines_identical() {
        for side_length in 3..=6 {
            let lines = winning_lines(side_length);
            for (i, a) in lines.iter().enumerate() {
                for b in lines.iter().skip(i + 1) {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_exact_lines_for_3x3() {
        let lines = winning_lines(3);
        let expected: Vec<Vec<usize>> = vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
            vec![1, 4, 7],
            vec![2, 5, 8],
            vec![3, 6, 9],
            vec![1, 5, 9],
            vec![3, 5, 7],
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_diagonals_for_4x4() {
        let lines = winning_lines(4);
        assert_eq!(lines[8], vec![1, 6, 11, 16]);
        assert_eq!(lines[9], vec![4, 7, 10, 13]);
    }
}
