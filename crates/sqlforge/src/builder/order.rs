//! ORDER BY / pagination facet.

use serde_json::Value;

use crate::builder::QueryBuilder;
use crate::clause::SortDirection;
use crate::error::BuilderResult;
use crate::ident::{format_parameter_name, format_selector};

const START_PARAM: &str = "start";
const PAGE_SIZE_PARAM: &str = "pageSize";

impl QueryBuilder {
    /// Append an ordering key: `ORDER BY <col> ASC|DESC` on the first call,
    /// `, <col> ASC|DESC` afterwards, so repeated calls compose a multi-key
    /// sort without repeating the keyword.
    pub fn order_by(&mut self, column: &str, ascending: bool) -> &mut Self {
        let direction = if ascending { "ASC" } else { "DESC" };
        let column = format_selector(column);
        if self.order_state.attach() {
            self.append_line(&format!("ORDER BY {column} {direction}"));
        } else {
            self.append_line(&format!(", {column} {direction}"));
        }
        self
    }

    /// Sugar for a continuation key; identical to
    /// [`order_by`](QueryBuilder::order_by) when no ordering exists yet.
    pub fn then_by(&mut self, column: &str, ascending: bool) -> &mut Self {
        self.order_by(column, ascending)
    }

    /// Convenience ordering with a fallback key: no-op when both `sorting`
    /// and `default_sorting` are empty.
    pub fn order(
        &mut self,
        sorting: &str,
        direction: SortDirection,
        default_sorting: Option<&str>,
    ) -> &mut Self {
        let sorting = if sorting.is_empty() {
            default_sorting.unwrap_or("")
        } else {
            sorting
        };
        if sorting.is_empty() {
            return self;
        }
        self.order_by(sorting, direction.is_ascending())
    }

    /// Append `OFFSET @start ROWS FETCH NEXT @pageSize ROWS ONLY`, binding
    /// the zero-based row offset `max(0, page_number - 1) * page_size` and
    /// the page size.
    ///
    /// Offset pagination requires an ordering in this dialect, so an
    /// unordered builder first gets a trivial `ORDER BY 1`.
    pub fn paginate(&mut self, page_number: i64, page_size: i64) -> BuilderResult<&mut Self> {
        let start = (page_number - 1).max(0) * page_size;

        if self.order_state.attach() {
            self.append_line("ORDER BY 1");
        }

        self.append_line(&format!(
            "OFFSET {} ROWS FETCH NEXT {} ROWS ONLY",
            format_parameter_name(START_PARAM),
            format_parameter_name(PAGE_SIZE_PARAM),
        ));
        self.add_parameter(START_PARAM, Value::from(start))?;
        self.add_parameter(PAGE_SIZE_PARAM, Value::from(page_size))?;
        Ok(self)
    }
}
