use std::collections::HashMap;

/// Precedence table for binary operators. Higher binds tighter.
///
/// The table is owned by the parser it is handed to; registering operators
/// after parsing has begun is not supported.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    entries: HashMap<char, i32>,
}

impl OperatorTable {
    pub fn new() -> OperatorTable {
        OperatorTable {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, op: char, precedence: i32) {
        self.entries.insert(op, precedence);
    }

    pub fn lookup(&self, op: char) -> Option<i32> {
        self.entries.get(&op).copied()
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        let mut table = OperatorTable::new();
        table.insert('<', 10);
        table.insert('+', 20);
        table.insert('-', 30);
        table.insert('*', 40);
        table
    }
}
