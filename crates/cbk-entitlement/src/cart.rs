use cbk_schemas::MealKind;

use crate::{CartLine, LineId};

/// The in-progress order.
///
/// Line ids are assigned monotonically and never reused within a session, so
/// a pending decision raised against a line always resolves onto the line it
/// was raised for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_line_id: u64,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_line_id: 1,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Non-exception units of `meal` currently staged.
    pub fn non_exception_units(&self, meal: MealKind) -> u32 {
        self.lines
            .iter()
            .filter(|l| l.meal == meal && !l.is_exception)
            .map(|l| l.quantity)
            .sum()
    }

    /// Non-exception units of `meal`, excluding one line. Used on the
    /// quantity-increase path so the line being changed does not count
    /// against its own target quantity.
    pub fn non_exception_units_excluding(&self, meal: MealKind, excluded: LineId) -> u32 {
        self.lines
            .iter()
            .filter(|l| l.meal == meal && !l.is_exception && l.id != excluded)
            .map(|l| l.quantity)
            .sum()
    }

    /// Merge one unit into the existing line matching both the meal kind and
    /// the exception flag, or open a new line of quantity 1.
    pub(crate) fn merge_unit(&mut self, meal: MealKind, is_exception: bool) -> LineId {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.meal == meal && l.is_exception == is_exception)
        {
            line.quantity += 1;
            return line.id;
        }
        self.push_line(meal, 1, is_exception)
    }

    /// Append a new exception line of quantity 1, never merging; exception
    /// consumption stays structurally distinguishable in the cart.
    pub(crate) fn push_exception_line(&mut self, meal: MealKind) -> LineId {
        self.push_line(meal, 1, true)
    }

    pub(crate) fn set_quantity(&mut self, id: LineId, quantity: u32) -> bool {
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }

    fn push_line(&mut self, meal: MealKind, quantity: u32, is_exception: bool) -> LineId {
        let id = LineId(self.next_line_id);
        self.next_line_id += 1;
        self.lines.push(CartLine {
            id,
            meal,
            quantity,
            is_exception,
        });
        id
    }
}
