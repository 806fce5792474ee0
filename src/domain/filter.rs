use crate::domain::board::{Board, Column};

/// Projects a board onto the tasks matching a free-text query.
///
/// Columns keep their identity, name and order; only their task lists are
/// filtered. Matching is a case-insensitive substring test on title and
/// description. An empty query yields the board unchanged.
pub fn filter_board(board: &Board, query: &str) -> Board {
    if query.is_empty() {
        return board.clone();
    }

    Board {
        id: board.id.clone(),
        name: board.name.clone(),
        columns: board
            .columns
            .iter()
            .map(|column| Column {
                id: column.id.clone(),
                name: column.name.clone(),
                tasks: column
                    .tasks
                    .iter()
                    .filter(|task| task.matches_query(query))
                    .cloned()
                    .collect(),
            })
            .collect(),
    }
}

/// Whether a column should show the "no search results" hint: the search
/// hid every task of a column that has some.
pub fn is_hidden_by_search(original: &Column, filtered: &Column, query: &str) -> bool {
    !query.is_empty() && filtered.tasks.is_empty() && !original.tasks.is_empty()
}
