//! Boolean XPath 1.0 evaluation on top of sxd-xpath

use sxd_xpath::{Context, Factory};

use crate::document::ResponseDocument;
use crate::error::{Error, Result};

/// Compile `expression` and evaluate it with the document's root element as
/// the context node, converting the result with the XPath 1.0 `boolean()`
/// rules: a node-set is true when non-empty, a number when it is neither
/// zero nor NaN, a string when it is non-empty.
pub fn evaluate_boolean(document: &ResponseDocument, expression: &str) -> Result<bool> {
    let xpath = Factory::new()
        .build(expression)
        .map_err(|e| Error::xpath_compile(format!("{:?}", e)))?
        .ok_or_else(|| Error::xpath_compile("No expression to compile"))?;

    let root = document.root().ok_or(Error::NoDocumentElement)?;
    let context = Context::new();
    let value = xpath
        .evaluate(&context, root)
        .map_err(|e| Error::xpath_eval(format!("{:?}", e)))?;

    Ok(value.boolean())
}
