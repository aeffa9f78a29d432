pub(crate) mod utils;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};

use crate::CheckerError;

pub use self::utils::NodeExt;

/// Parses a full HTML document.
pub fn parse_html(html: &str) -> Result<RcDom, CheckerError> {
    parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| CheckerError::ParseError(e.to_string()))
}

/// Returns the `<body>` element of a parsed document, or the document node
/// itself when the tree has no body.
pub fn content_root(dom: &RcDom) -> Handle {
    let mut body = None;
    utils::walk_descendants(&dom.document, |node| {
        if body.is_none() && node.tag_name() == Some("body") {
            body = Some(node.clone());
        }
    });
    body.unwrap_or_else(|| dom.document.clone())
}
