//! C header rendering.
//!
//! The header only declares `#define` sizes and `const` arrays; every value
//! is computed beforehand and written through [`c_string_literal`].

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::collate::Collation;
use crate::country::Country;

pub const DEFAULT_OUTPUT: &str = "src/genres.h";

/// Color emitted for genres whose page gave none.
pub const FALLBACK_COLOR: u16 = 0xFFFF;

/// Render `value` as a double-quoted C string literal.
///
/// Non-ASCII text is kept as UTF-8. Control characters use octal escapes,
/// which never swallow a following digit the way `\x` escapes do.
pub fn c_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut previous = None;
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `??` starts a trigraph
            '?' if previous == Some('?') => out.push_str("\\?"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
        previous = Some(c);
    }
    out.push('"');
    out
}

fn list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let items: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    format!("{{ {} }}", items.join(", "))
}

fn strings<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    list(items.into_iter().map(c_string_literal))
}

/// Write the whole header for `collation` and, when given, `countries`.
pub fn render<W: Write>(
    out: &mut W,
    collation: &Collation,
    countries: Option<&[Country]>,
) -> io::Result<()> {
    let genres = &collation.alphabetical;

    writeln!(out, "#define GENRE_COUNT {}", genres.len())?;
    if let Some(countries) = countries {
        writeln!(out, "#define COUNTRY_COUNT {}", countries.len())?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "const char* genres[GENRE_COUNT] = {};\n",
        strings(collation.names())
    )?;
    writeln!(
        out,
        "const char* genrePlaylists[GENRE_COUNT] = {};\n",
        strings(genres.iter().map(|g| g.id.as_str()))
    )?;

    if let Some(countries) = countries {
        writeln!(
            out,
            "const char* countries[COUNTRY_COUNT] = {};\n",
            strings(countries.iter().map(|c| c.name.as_str()))
        )?;
        writeln!(
            out,
            "const char* countryPlaylists[COUNTRY_COUNT] = {};\n",
            strings(countries.iter().map(|c| c.playlist_id.as_str()))
        )?;
    }

    if genres.iter().any(|g| g.color.is_some()) {
        writeln!(
            out,
            "const uint16_t genreColors[GENRE_COUNT] = {};\n",
            list(genres.iter().map(|g| g.color.unwrap_or(FALLBACK_COLOR)))
        )?;
    }

    writeln!(
        out,
        "const uint16_t genreIndexes_suffix[GENRE_COUNT] = {};\n",
        list(&collation.suffix)
    )?;

    for ordering in &collation.orderings {
        writeln!(
            out,
            "const uint16_t genreIndexes_{}[GENRE_COUNT] = {};\n",
            ordering.vector,
            list(&ordering.indexes)
        )?;
        if let Some(labels) = &ordering.labels {
            writeln!(
                out,
                "const char* genreLabels_{}[GENRE_COUNT] = {};",
                ordering.vector,
                strings(labels.iter().map(String::as_str))
            )?;
        }
    }
    writeln!(out)
}

/// Render the header into memory.
pub fn render_to_string(
    collation: &Collation,
    countries: Option<&[Country]>,
) -> io::Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, collation, countries)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Create or truncate `path` and write the header to it.
pub fn write_header(
    path: &Path,
    collation: &Collation,
    countries: Option<&[Country]>,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    render(&mut writer, collation, countries)?;
    writer.flush()?;
    info!(
        "Wrote {} genres to {}",
        collation.alphabetical.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::VectorOrdering;
    use crate::genre::Genre;
    use crate::vector::Vector;

    fn collation(colors: [Option<u16>; 2], labels: Option<Vec<String>>) -> Collation {
        let genre = |name: &str, id: &str, color| Genre {
            name: name.to_string(),
            id: id.to_string(),
            label: None,
            color,
        };
        Collation {
            alphabetical: vec![genre("a", "ida", colors[0]), genre("b", "idb", colors[1])],
            suffix: vec![1, 0],
            orderings: vec![VectorOrdering {
                vector: Vector::Popularity,
                indexes: vec![1, 0],
                labels,
            }],
        }
    }

    #[test]
    fn escapes_c_strings() {
        assert_eq!(c_string_literal("plain"), r#""plain""#);
        assert_eq!(c_string_literal(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(c_string_literal(r"back\slash"), r#""back\\slash""#);
        assert_eq!(c_string_literal("a\nb\tc"), r#""a\nb\tc""#);
        assert_eq!(c_string_literal("bell\u{7}1"), r#""bell\0071""#);
        assert_eq!(c_string_literal("what??!"), r#""what?\?!""#);
        assert_eq!(c_string_literal("são paulo"), "\"são paulo\"");
    }

    #[test]
    fn renders_without_countries_or_labels() {
        let header = render_to_string(&collation([Some(31), None], None), None).unwrap();
        assert_eq!(
            header,
            "#define GENRE_COUNT 2\n\
             \n\
             const char* genres[GENRE_COUNT] = { \"a\", \"b\" };\n\
             \n\
             const char* genrePlaylists[GENRE_COUNT] = { \"ida\", \"idb\" };\n\
             \n\
             const uint16_t genreColors[GENRE_COUNT] = { 31, 65535 };\n\
             \n\
             const uint16_t genreIndexes_suffix[GENRE_COUNT] = { 1, 0 };\n\
             \n\
             const uint16_t genreIndexes_popularity[GENRE_COUNT] = { 1, 0 };\n\
             \n\
             \n"
        );
    }

    #[test]
    fn colors_are_omitted_when_none_were_found() {
        let header = render_to_string(&collation([None, None], None), None).unwrap();
        assert!(!header.contains("genreColors"));
    }

    #[test]
    fn labels_and_countries_are_emitted_when_present() {
        let labels = Some(vec!["9".to_string(), "1".to_string()]);
        let countries = [Country::new("Chile", "cl")];
        let header =
            render_to_string(&collation([None, None], labels), Some(&countries)).unwrap();

        assert!(header.starts_with("#define GENRE_COUNT 2\n#define COUNTRY_COUNT 1\n\n"));
        assert!(header.contains("const char* countries[COUNTRY_COUNT] = { \"Chile\" };\n\n"));
        assert!(header.contains("const char* countryPlaylists[COUNTRY_COUNT] = { \"cl\" };\n\n"));
        assert!(header.ends_with(
            "const uint16_t genreIndexes_popularity[GENRE_COUNT] = { 1, 0 };\n\
             \n\
             const char* genreLabels_popularity[GENRE_COUNT] = { \"9\", \"1\" };\n\
             \n"
        ));
    }
}
