//! Search, sort and paging settings of one mounted page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Match if any of the record type's search fields matches
    AllFields,
    /// Match only against this wire field
    Field(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Page is 1-based and goes back to 1 whenever the search changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub search_scope: SearchScope,
    pub sort_field: Option<&'static str>,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize, default_sort: Option<(&'static str, SortDirection)>) -> Self {
        Self {
            search_term: String::new(),
            search_scope: SearchScope::AllFields,
            sort_field: default_sort.map(|(f, _)| f),
            sort_direction: default_sort
                .map(|(_, d)| d)
                .unwrap_or(SortDirection::Ascending),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search_term {
            self.search_term = term;
            self.page = 1;
        }
    }

    pub fn set_search_scope(&mut self, scope: SearchScope) {
        if scope != self.search_scope {
            self.search_scope = scope;
            self.page = 1;
        }
    }

    /// Same field flips direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: &'static str) {
        if self.sort_field == Some(field) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = Some(field);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        match (self.sort_field, self.sort_direction) {
            (Some(f), SortDirection::Ascending) if f == field => " ▲",
            (Some(f), SortDirection::Descending) if f == field => " ▼",
            _ => " ⇅",
        }
    }
}
