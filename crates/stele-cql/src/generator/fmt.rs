use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragment:expr ),* $(,)?) => {{
        $(
            $fragment.to_cql($f);
        )*
    }};
}

pub(super) trait ToCql {
    fn to_cql(self, f: &mut Formatter<'_>);
}

impl ToCql for &str {
    fn to_cql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}
