//! Block structure: headings, paragraphs, lists, delimited blocks

use super::inline::{escape_html, render_inline};

/// Admonition labels recognised at the start of a paragraph
const ADMONITIONS: [&str; 5] = ["NOTE", "TIP", "IMPORTANT", "WARNING", "CAUTION"];

/// Parsed block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: usize, text: String },
    Paragraph(Vec<String>),
    Admonition { kind: &'static str, lines: Vec<String> },
    List { ordered: bool, items: Vec<String> },
    Listing(Vec<String>),
    Quote(Vec<Block>),
    Image { target: String, alt: String },
    Rule,
}

impl Block {
    pub fn to_html(&self) -> String {
        match self {
            Block::Heading { level, text } => {
                format!("<h{level}>{}</h{level}>", render_inline(text))
            }
            Block::Paragraph(lines) => format!("<p>{}</p>", render_lines(lines)),
            Block::Admonition { kind, lines } => format!(
                "<div class=\"admonition {}\"><p>{}</p></div>",
                kind.to_lowercase(),
                render_lines(lines)
            ),
            Block::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                let mut html = format!("<{tag}>\n");
                for item in items {
                    html.push_str("<li>");
                    html.push_str(&render_inline(item));
                    html.push_str("</li>\n");
                }
                html.push_str(&format!("</{tag}>"));
                html
            }
            Block::Listing(lines) => format!("<pre>{}</pre>", escape_html(&lines.join("\n"))),
            Block::Quote(blocks) => {
                if blocks.is_empty() {
                    "<blockquote></blockquote>".to_string()
                } else {
                    format!("<blockquote>\n{}\n</blockquote>", blocks_to_html(blocks))
                }
            }
            Block::Image { target, alt } => format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(target),
                escape_html(alt)
            ),
            Block::Rule => "<hr>".to_string(),
        }
    }
}

fn render_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| render_inline(l))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn blocks_to_html(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Kind of delimited block a fence line opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fence {
    Listing,
    Quote,
    Comment,
}

fn fence(trimmed: &str) -> Option<Fence> {
    let first = trimmed.chars().next()?;
    if trimmed.len() < 4 || !trimmed.chars().all(|c| c == first) {
        return None;
    }
    match first {
        '-' => Some(Fence::Listing),
        '_' => Some(Fence::Quote),
        '/' => Some(Fence::Comment),
        _ => None,
    }
}

fn heading(trimmed: &str) -> Option<(usize, &str)> {
    let level = trimmed.bytes().take_while(|b| *b == b'=').count();
    if level == 0 || level > 6 {
        return None;
    }
    let text = trimmed[level..].strip_prefix(' ')?.trim();
    if text.is_empty() {
        None
    } else {
        Some((level, text))
    }
}

fn list_item(trimmed: &str) -> Option<(bool, &str)> {
    let (ordered, rest) = if let Some(rest) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        (false, rest)
    } else {
        (true, trimmed.strip_prefix(". ")?)
    };
    let text = rest.trim();
    if text.is_empty() {
        None
    } else {
        Some((ordered, text))
    }
}

fn image(trimmed: &str) -> Option<Block> {
    let rest = trimmed.strip_prefix("image::")?.strip_suffix(']')?;
    let (target, alt) = rest.split_once('[')?;
    if target.is_empty() || target.contains(char::is_whitespace) {
        return None;
    }
    let alt = if alt.trim().is_empty() {
        // Default alt text is the file stem, as Asciidoctor does
        target
            .rsplit('/')
            .next()
            .and_then(|name| name.split('.').next())
            .unwrap_or(target)
            .to_string()
    } else {
        alt.trim().to_string()
    };
    Some(Block::Image {
        target: target.to_string(),
        alt,
    })
}

/// `:name:` or `:name: value` document attribute entry
fn is_attribute_entry(trimmed: &str) -> bool {
    let Some(rest) = trimmed.strip_prefix(':') else {
        return false;
    };
    match rest.split_once(':') {
        Some((name, value)) => {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '!')
                && (value.is_empty() || value.starts_with(' '))
        }
        None => false,
    }
}

fn is_line_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") && fence(trimmed).is_none()
}

/// `[source,rust]` style attribute line directly above a fence
fn is_block_attributes(trimmed: &str, next: Option<&str>) -> bool {
    trimmed.starts_with('[')
        && trimmed.ends_with(']')
        && next.is_some_and(|n| fence(n.trim()).is_some())
}

fn starts_block(trimmed: &str) -> bool {
    fence(trimmed).is_some()
        || heading(trimmed).is_some()
        || list_item(trimmed).is_some()
        || trimmed == "'''"
        || image(trimmed).is_some()
}

fn admonition(first: &str) -> Option<(&'static str, &str)> {
    ADMONITIONS.iter().find_map(|kind| {
        let rest = first.strip_prefix(kind)?.strip_prefix(": ")?;
        Some((*kind, rest))
    })
}

/// Split source lines into blocks
pub fn parse_blocks(lines: &[&str]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim();

        if trimmed.is_empty() || is_attribute_entry(trimmed) || is_line_comment(trimmed) {
            i += 1;
            continue;
        }

        if let Some(kind) = fence(trimmed) {
            // Unclosed fences run to the end of the document
            let close = lines[i + 1..]
                .iter()
                .position(|l| l.trim() == trimmed)
                .map(|p| p + i + 1)
                .unwrap_or(lines.len());
            let inner = &lines[i + 1..close];
            match kind {
                Fence::Listing => {
                    blocks.push(Block::Listing(inner.iter().map(|l| l.to_string()).collect()))
                }
                Fence::Quote => blocks.push(Block::Quote(parse_blocks(inner))),
                Fence::Comment => {}
            }
            i = close + 1;
            continue;
        }

        if is_block_attributes(trimmed, lines.get(i + 1).copied()) {
            i += 1;
            continue;
        }

        if trimmed == "'''" {
            blocks.push(Block::Rule);
            i += 1;
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            i += 1;
            continue;
        }

        if let Some(img) = image(trimmed) {
            blocks.push(img);
            i += 1;
            continue;
        }

        if let Some((ordered, first)) = list_item(trimmed) {
            let mut items = vec![first.to_string()];
            i += 1;
            while i < lines.len() {
                let t = lines[i].trim();
                if t.is_empty() {
                    break;
                }
                if is_line_comment(t) {
                    i += 1;
                    continue;
                }
                match list_item(t) {
                    Some((o, text)) if o == ordered => items.push(text.to_string()),
                    Some(_) => break,
                    None if starts_block(t) => break,
                    None => {
                        // Continuation line folds into the previous item
                        if let Some(last) = items.last_mut() {
                            last.push(' ');
                            last.push_str(t);
                        }
                    }
                }
                i += 1;
            }
            blocks.push(Block::List { ordered, items });
            continue;
        }

        let mut para = Vec::new();
        while i < lines.len() {
            let t = lines[i].trim();
            if t.is_empty() || (!para.is_empty() && starts_block(t)) {
                break;
            }
            if !is_line_comment(t) {
                para.push(t.to_string());
            }
            i += 1;
        }
        if let Some(first) = para.first() {
            if let Some((kind, rest)) = admonition(first) {
                let mut body = para.clone();
                body[0] = rest.to_string();
                blocks.push(Block::Admonition { kind, lines: body });
                continue;
            }
        }
        if !para.is_empty() {
            blocks.push(Block::Paragraph(para));
        }
    }

    blocks
}
