//! Inline formatting: `*strong*`, `_emphasis_`, `` `code` `` and `link:url[text]`
//!
//! Text is HTML-escaped first and markers are matched on the escaped
//! characters. Escaping never produces `*`, `_`, `` ` `` or `[`, so markers
//! survive it unchanged. Unmatched markers are emitted literally.

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one line (or a joined run of lines) of inline markup
pub fn render_inline(text: &str) -> String {
    let chars: Vec<char> = escape_html(text).chars().collect();
    let scanner = Scanner::new(&chars);
    let mut out = String::with_capacity(chars.len());
    scanner.format_span(0, chars.len(), &mut out);
    out
}

/// Escaped text plus next-occurrence tables for every closing delimiter.
///
/// `next_*[j]` is the first index `>= j` holding that delimiter, or
/// `chars.len()`. Each lookup is O(1), so rendering stays linear however
/// many markers go unmatched. Nested spans always end just before a
/// non-alphanumeric delimiter, so closer validity computed over the whole
/// text holds inside every span too.
struct Scanner<'a> {
    chars: &'a [char],
    next_strong: Vec<usize>,
    next_emphasis: Vec<usize>,
    next_tick: Vec<usize>,
    next_bracket_or_space: Vec<usize>,
    next_close_bracket: Vec<usize>,
}

impl<'a> Scanner<'a> {
    fn new(chars: &'a [char]) -> Self {
        let closes = |marker: char| {
            move |j: usize| {
                chars[j] == marker
                    && j > 0
                    && !chars[j - 1].is_whitespace()
                    && chars.get(j + 1).is_none_or(|c| !c.is_alphanumeric())
            }
        };
        Self {
            chars,
            next_strong: next_table(chars.len(), closes('*')),
            next_emphasis: next_table(chars.len(), closes('_')),
            next_tick: next_table(chars.len(), |j| chars[j] == '`'),
            next_bracket_or_space: next_table(chars.len(), |j| {
                chars[j] == '[' || chars[j].is_whitespace()
            }),
            next_close_bracket: next_table(chars.len(), |j| chars[j] == ']'),
        }
    }

    /// First hit at or after `from` and before `end`
    fn lookup(next: &[usize], from: usize, end: usize) -> Option<usize> {
        next.get(from).copied().filter(|&j| j < end)
    }

    fn format_span(&self, start: usize, end: usize, out: &mut String) {
        let chars = self.chars;
        let mut i = start;
        while i < end {
            let c = chars[i];
            match c {
                '`' => {
                    if let Some(close) = Self::lookup(&self.next_tick, i + 2, end) {
                        out.push_str("<code>");
                        out.extend(&chars[i + 1..close]);
                        out.push_str("</code>");
                        i = close + 1;
                        continue;
                    }
                }
                '*' | '_' => {
                    if self.opens_at(i, start, end) {
                        let next = if c == '*' {
                            &self.next_strong
                        } else {
                            &self.next_emphasis
                        };
                        if let Some(close) = Self::lookup(next, i + 2, end) {
                            let tag = if c == '*' { "strong" } else { "em" };
                            out.push('<');
                            out.push_str(tag);
                            out.push('>');
                            self.format_span(i + 1, close, out);
                            out.push_str("</");
                            out.push_str(tag);
                            out.push('>');
                            i = close + 1;
                            continue;
                        }
                    }
                }
                'l' => {
                    if let Some(link) = self.parse_link(i, start, end) {
                        out.push_str("<a href=\"");
                        out.extend(&chars[link.url.0..link.url.1]);
                        out.push_str("\">");
                        if link.label.0 == link.label.1 {
                            out.extend(&chars[link.url.0..link.url.1]);
                        } else {
                            self.format_span(link.label.0, link.label.1, out);
                        }
                        out.push_str("</a>");
                        i = link.next;
                        continue;
                    }
                }
                _ => {}
            }
            out.push(c);
            i += 1;
        }
    }

    fn at_word_start(&self, i: usize, start: usize) -> bool {
        i == start || !self.chars[i - 1].is_alphanumeric()
    }

    fn opens_at(&self, i: usize, start: usize, end: usize) -> bool {
        let chars = self.chars;
        self.at_word_start(i, start)
            && i + 1 < end
            && !chars[i + 1].is_whitespace()
            && chars[i + 1] != chars[i]
    }

    fn parse_link(&self, i: usize, start: usize, end: usize) -> Option<Link> {
        let chars = self.chars;
        if !self.at_word_start(i, start) || !chars[i..end].starts_with(&LINK_PREFIX) {
            return None;
        }
        let url_start = i + LINK_PREFIX.len();
        let open = Self::lookup(&self.next_bracket_or_space, url_start, end)?;
        if chars[open] != '[' || open == url_start {
            return None;
        }
        if is_script_url(&chars[url_start..open]) {
            return None;
        }
        let close = Self::lookup(&self.next_close_bracket, open + 1, end)?;
        Some(Link {
            url: (url_start, open),
            label: (open + 1, close),
            next: close + 1,
        })
    }
}

/// Backward pass: entry `j` is the first index `>= j` where `hit` holds, or `n`
fn next_table(n: usize, hit: impl Fn(usize) -> bool) -> Vec<usize> {
    let mut next = vec![n; n + 1];
    for j in (0..n).rev() {
        next[j] = if hit(j) { j } else { next[j + 1] };
    }
    next
}

/// Char ranges of a parsed `link:url[label]` macro
struct Link {
    url: (usize, usize),
    label: (usize, usize),
    next: usize,
}

const LINK_PREFIX: [char; 5] = ['l', 'i', 'n', 'k', ':'];

fn is_script_url(url: &[char]) -> bool {
    const SCHEME: &str = "javascript:";
    url.len() >= SCHEME.len()
        && url
            .iter()
            .zip(SCHEME.chars())
            .all(|(c, s)| c.to_ascii_lowercase() == s)
}
