/// Tidies extracted text
///
/// This:
/// - Strips trailing whitespace from each line
/// - Collapses runs of blank lines into a single blank line
/// - Collapses repeated spaces inside a line, keeping its indentation
/// - Leaves fenced code blocks untouched
pub fn tidy(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let paragraphs = split_into_paragraphs(text);
    let processed = paragraphs
        .iter()
        .map(|para| process_paragraph(para))
        .collect::<Vec<_>>();

    join_paragraphs(&processed)
}

/// Splits text into paragraphs on blank lines; a fenced code block is one paragraph
pub fn split_into_paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in text.lines() {
        let line = line.trim_end();

        if is_fence(line) {
            if !in_fence && !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            current.push(line);
            if in_fence {
                paragraphs.push(std::mem::take(&mut current));
            }
            in_fence = !in_fence;
            continue;
        }

        if in_fence {
            current.push(line);
        } else if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    // Unterminated fences keep whatever they collected
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

/// Normalizes each line of a paragraph; fenced blocks are returned as-is
pub fn process_paragraph(paragraph: &[&str]) -> String {
    if paragraph.first().is_some_and(|line| is_fence(line)) {
        return paragraph.join("\n");
    }

    paragraph
        .iter()
        .map(|line| normalize_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins processed paragraphs with one blank line between them
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs
        .iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Collapses whitespace runs inside a line while keeping its leading indentation
pub fn normalize_line(line: &str) -> String {
    let content = line.trim_start();
    let indent = &line[..line.len() - content.len()];
    let words = content.split_whitespace().collect::<Vec<_>>().join(" ");

    format!("{indent}{words}")
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}
