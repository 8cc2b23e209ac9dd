//! CLI enum types.

use clap::ValueEnum;

use crate::app::ViewMode;

/// Initial content view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewArg {
    #[default]
    Table,
    Detail,
    Compact,
}

impl From<ViewArg> for ViewMode {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Table => ViewMode::Table,
            ViewArg::Detail => ViewMode::Detail,
            ViewArg::Compact => ViewMode::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_arg_to_view_mode() {
        assert_eq!(ViewMode::from(ViewArg::Table), ViewMode::Table);
        assert_eq!(ViewMode::from(ViewArg::Detail), ViewMode::Detail);
        assert_eq!(ViewMode::from(ViewArg::Compact), ViewMode::Compact);
    }

    #[test]
    fn test_view_arg_names_parse_as_view_modes() {
        for arg in ViewArg::value_variants() {
            let name = arg
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default();
            assert_eq!(ViewMode::from_name(&name), Some(ViewMode::from(*arg)));
        }
    }
}
