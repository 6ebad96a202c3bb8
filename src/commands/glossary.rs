//! Print the glossary

use anyhow::Result;

use crate::content::Content;
use crate::listing::GlossaryView;
use crate::Site;

/// Print glossary terms grouped by letter
pub fn run(site: &Site, search: &str, tag: Option<&str>, term: Option<&str>) -> Result<()> {
    let content = site.load_content()?;
    print!("{}", render(&content, search, tag, term));
    Ok(())
}

/// `term` is a URL hash or term text; the matching term prints expanded
pub fn render(content: &Content, search: &str, tag: Option<&str>, term: Option<&str>) -> String {
    let view = GlossaryView::build(&content.glossary, search, tag, term);
    let mut out = String::new();

    if view.is_empty() {
        out.push_str("No terms found.\n");
        return out;
    }

    if let Some(anchor) = term {
        if view.expanded.is_none() {
            tracing::warn!("No visible glossary term for '{}'", anchor);
        }
    }

    for (letter, terms) in &view.groups {
        out.push_str(&format!("{}\n", letter));
        for t in terms {
            let expanded = view.expanded.map(|e| e.term == t.term).unwrap_or(false);
            if expanded {
                out.push_str(&format!("  * {} (#{})\n", t.term, t.anchor()));
                out.push_str(&format!("      {}\n", t.definition));
                if let Some(source) = &t.source {
                    out.push_str(&format!("      source: {}\n", source));
                }
                if !t.related.is_empty() {
                    out.push_str(&format!("      see also: {}\n", t.related.join(", ")));
                }
            } else {
                out.push_str(&format!("  {}\n", t.term));
            }
        }
    }

    out
}
