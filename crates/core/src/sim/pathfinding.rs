//! Breadth-first shortest paths over lit floor tiles.
//! Visited and parent state live in arrays indexed by row-major cell
//! index, so the search is O(rows x cols) with no hashing.

use std::collections::VecDeque;

use crate::state::Grid;
use crate::types::Cell;

const NO_PARENT: u32 = u32::MAX;

/// Returns the inclusive start-to-goal cell sequence, `[start]` when the
/// two coincide, or an empty vector when no route exists. Expansion only
/// enters `Floor` cells; the start cell itself may be of any class, since
/// a guard can be standing in shadow when it plans a route out.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Vec<Cell> {
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return Vec::new();
    }

    let width = grid.width();
    let cell_count = width * grid.height();
    let mut visited = vec![false; cell_count];
    let mut parent = vec![NO_PARENT; cell_count];

    let mut queue = VecDeque::new();
    visited[linear_index(width, start)] = true;
    queue.push_back(start);

    let mut found = false;
    while let Some(node) = queue.pop_front() {
        if node == goal {
            found = true;
            break;
        }
        for next in neighbors(node) {
            if !grid.in_bounds(next) {
                continue;
            }
            let next_index = linear_index(width, next);
            if visited[next_index] || !grid.tile_at(next).is_walkable() {
                continue;
            }
            visited[next_index] = true;
            parent[next_index] = linear_index(width, node) as u32;
            queue.push_back(next);
        }
    }

    if !found {
        return Vec::new();
    }

    let mut path = vec![goal];
    let mut current = linear_index(width, goal);
    while parent[current] != NO_PARENT {
        current = parent[current] as usize;
        path.push(cell_at(width, current));
    }
    path.reverse();
    path
}

/// Fixed visitation order: down, up, right, left. Paths are reproducible
/// for a given grid because of it.
fn neighbors(cell: Cell) -> [Cell; 4] {
    [
        Cell { row: cell.row + 1, col: cell.col },
        Cell { row: cell.row - 1, col: cell.col },
        Cell { row: cell.row, col: cell.col + 1 },
        Cell { row: cell.row, col: cell.col - 1 },
    ]
}

fn linear_index(width: usize, cell: Cell) -> usize {
    (cell.row as usize) * width + (cell.col as usize)
}

fn cell_at(width: usize, index: usize) -> Cell {
    Cell { row: (index / width) as i32, col: (index % width) as i32 }
}
