//! Data table component types.
//!
//! These types define the configuration for the sortable tables on the
//! list pages: column definitions, the current sort state parsed from the
//! query string, and the rendered header cells with their sort links.

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Unique key for the column; doubles as the `sort` query value.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_owned(),
            label: label.to_owned(),
            sortable: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_owned(),
            label: label.to_owned(),
            sortable: false,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// The query-string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Parse a query value; anything but `desc` is ascending.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Current sort state of a list view, parsed from `?sort=` and `?dir=`.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    /// The active sort column key, if any.
    pub key: Option<String>,
    /// The active direction.
    pub dir: SortDir,
}

impl SortState {
    /// Build a sort state from the raw query parameters.
    #[must_use]
    pub fn from_query(sort: Option<String>, dir: Option<String>) -> Self {
        Self {
            key: sort.filter(|s| !s.is_empty()),
            dir: SortDir::parse(dir.as_deref()),
        }
    }

    /// Whether `key` is the active sort column.
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

/// A rendered header cell: label plus a ready-made sort link.
#[derive(Debug, Clone)]
pub struct ColumnHeader {
    pub label: String,
    pub sortable: bool,
    /// Href that sorts by this column (toggling direction when active).
    pub href: String,
    /// Direction marker for the active column, empty otherwise.
    pub indicator: String,
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Title shown when the table has no rows.
    pub empty_title: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_owned(),
            columns: vec![],
            empty_title: "No items found".to_owned(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the empty-state title.
    #[must_use]
    pub fn empty_title(mut self, title: &str) -> Self {
        self.empty_title = title.to_owned();
        self
    }

    /// Render the header cells for the current sort state.
    ///
    /// `base_query` carries parameters that must survive sorting (the
    /// staff page's `businessId`); sort links toggle direction when the
    /// column is already active.
    #[must_use]
    pub fn headers(
        &self,
        base_path: &str,
        base_query: &[(&str, &str)],
        sort: &SortState,
    ) -> Vec<ColumnHeader> {
        self.columns
            .iter()
            .map(|column| {
                let active = sort.is_active(&column.key);
                let dir = if active {
                    sort.dir.toggled()
                } else {
                    SortDir::Asc
                };

                // Ids are opaque strings; everything gets encoded.
                let mut query = url::form_urlencoded::Serializer::new(String::new());
                for (key, value) in base_query {
                    query.append_pair(key, value);
                }
                query.append_pair("sort", &column.key);
                query.append_pair("dir", dir.as_str());

                let indicator = if active {
                    match sort.dir {
                        SortDir::Asc => "\u{25b2}".to_owned(),
                        SortDir::Desc => "\u{25bc}".to_owned(),
                    }
                } else {
                    String::new()
                };

                ColumnHeader {
                    label: column.label.clone(),
                    sortable: column.sortable,
                    href: format!("{base_path}?{}", query.finish()),
                    indicator,
                }
            })
            .collect()
    }
}

/// Build the businesses table configuration.
#[must_use]
pub fn businesses_table() -> DataTableConfig {
    DataTableConfig::new("businesses")
        .column(TableColumn::sortable("id", "ID"))
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("location", "Location"))
        .column(TableColumn::sortable("type", "Type"))
        .column(TableColumn::new("actions", "Actions"))
        .empty_title("No businesses found")
}

/// Build the staff table configuration.
#[must_use]
pub fn staff_table() -> DataTableConfig {
    DataTableConfig::new("staff")
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("email", "Email"))
        .column(TableColumn::sortable("position", "Position"))
        .column(TableColumn::sortable("phone", "Phone"))
        .column(TableColumn::new("actions", "Actions"))
        .empty_title("No staff members found for this business.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_state_parses_query_values() {
        let sort = SortState::from_query(Some("name".to_owned()), Some("desc".to_owned()));
        assert!(sort.is_active("name"));
        assert_eq!(sort.dir, SortDir::Desc);

        let none = SortState::from_query(None, Some("sideways".to_owned()));
        assert!(none.key.is_none());
        assert_eq!(none.dir, SortDir::Asc);
    }

    #[test]
    fn active_column_link_toggles_direction() {
        let config = businesses_table();
        let sort = SortState::from_query(Some("name".to_owned()), None);
        let headers = config.headers("/businesses", &[], &sort);

        let name = headers.iter().find(|h| h.label == "Name").expect("name column");
        assert_eq!(name.href, "/businesses?sort=name&dir=desc");
        assert_eq!(name.indicator, "\u{25b2}");

        let location = headers
            .iter()
            .find(|h| h.label == "Location")
            .expect("location column");
        assert_eq!(location.href, "/businesses?sort=location&dir=asc");
        assert!(location.indicator.is_empty());
    }

    #[test]
    fn base_query_survives_sort_links() {
        let config = staff_table();
        let headers = config.headers("/staff", &[("businessId", "7")], &SortState::default());

        let email = headers.iter().find(|h| h.label == "Email").expect("email column");
        assert_eq!(email.href, "/staff?businessId=7&sort=email&dir=asc");
    }

    #[test]
    fn reserved_characters_in_query_values_are_encoded() {
        let config = staff_table();
        let headers = config.headers("/staff", &[("businessId", "a&b #c")], &SortState::default());

        let email = headers.iter().find(|h| h.label == "Email").expect("email column");
        assert_eq!(email.href, "/staff?businessId=a%26b+%23c&sort=email&dir=asc");
    }

    #[test]
    fn table_configs_cover_the_visible_columns() {
        assert_eq!(businesses_table().columns.len(), 5);
        assert_eq!(staff_table().columns.len(), 5);
        assert!(!businesses_table().columns.last().expect("actions").sortable);
    }
}
