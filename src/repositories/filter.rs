/// Incremental WHERE-clause builder shared by the list endpoints.
///
/// Conditions are AND-composed in insertion order and arguments are kept in
/// the matching order, so callers bind them sequentially onto the query.
/// Blank and absent filter values are skipped.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    conditions: Vec<String>,
    arguments: Vec<String>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `AND (column = ?)` when the value is present and non-blank.
    pub fn equals(&mut self, column: &str, value: Option<&str>) {
        if let Some(value) = non_blank(value) {
            self.conditions.push(format!("({column} = ?)"));
            self.arguments.push(value.to_string());
        }
    }

    /// Append `AND (<fragment>)` where the fragment carries exactly one `?`
    /// placeholder. Used for store-side conversions such as
    /// `data_inicio = STR_TO_DATE(?, '%Y-%m-%d')`.
    pub fn fragment(&mut self, fragment: &str, value: Option<&str>) {
        if let Some(value) = non_blank(value) {
            self.conditions.push(format!("({fragment})"));
            self.arguments.push(value.to_string());
        }
    }

    /// Append an OR-group of `LIKE` conditions over `columns`, binding one
    /// `%value%` argument per column.
    pub fn search(&mut self, columns: &[&str], value: Option<&str>) {
        if let Some(value) = non_blank(value) {
            let like = format!("%{value}%");
            let group = columns
                .iter()
                .map(|column| format!("{column} LIKE ?"))
                .collect::<Vec<_>>()
                .join(" OR ");

            self.conditions.push(format!("({group})"));
            for _ in columns {
                self.arguments.push(like.clone());
            }
        }
    }

    /// The assembled clause, ready to append to a base query that already has
    /// a WHERE: `" AND (..) AND (..)"`, or empty when nothing matched.
    pub fn clause(&self) -> String {
        self.conditions
            .iter()
            .map(|condition| format!(" AND {condition}"))
            .collect()
    }

    /// Arguments in bind order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_yields_empty_clause() {
        let mut filter = FilterBuilder::new();
        filter.equals("nome", None);
        filter.search(&["nome", "cnpj"], None);

        assert_eq!(filter.clause(), "");
        assert!(filter.arguments().is_empty());
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let mut filter = FilterBuilder::new();
        filter.equals("nome", Some(""));
        filter.equals("cnpj", Some("   "));

        assert_eq!(filter.clause(), "");
    }

    #[test]
    fn test_equals_composes_in_call_order() {
        let mut filter = FilterBuilder::new();
        filter.equals("nome", Some("Acme"));
        filter.equals("cnpj", Some("12345678901234"));

        assert_eq!(filter.clause(), " AND (nome = ?) AND (cnpj = ?)");
        assert_eq!(filter.arguments(), ["Acme", "12345678901234"]);
    }

    #[test]
    fn test_search_builds_or_group_with_one_argument_per_column() {
        let mut filter = FilterBuilder::new();
        filter.search(&["nome", "cnpj"], Some("acme"));

        assert_eq!(filter.clause(), " AND (nome LIKE ? OR cnpj LIKE ?)");
        assert_eq!(filter.arguments(), ["%acme%", "%acme%"]);
    }

    #[test]
    fn test_fragment_keeps_single_placeholder() {
        let mut filter = FilterBuilder::new();
        filter.fragment("data_inicio = STR_TO_DATE(?, '%Y-%m-%d')", Some("2024-01-01"));

        assert_eq!(
            filter.clause(),
            " AND (data_inicio = STR_TO_DATE(?, '%Y-%m-%d'))"
        );
        assert_eq!(filter.arguments(), ["2024-01-01"]);
    }

    #[test]
    fn test_search_then_equals_keeps_argument_order() {
        let mut filter = FilterBuilder::new();
        filter.search(&["logradouro", "bairro"], Some("centro"));
        filter.equals("cidade", Some("Curitiba"));

        assert_eq!(
            filter.clause(),
            " AND (logradouro LIKE ? OR bairro LIKE ?) AND (cidade = ?)"
        );
        assert_eq!(filter.arguments(), ["%centro%", "%centro%", "Curitiba"]);
    }
}
