use crate::{
    Classification, DashboardError, Package, StatusType,
    ports::{DashboardContext, DashboardPage, DashboardRenderer},
};

/// Renders dashboard pages as self-contained HTML documents.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn render_grid(&self, context: &DashboardContext<'_>) -> Result<String, DashboardError> {
        let mut body = String::from("<table class=\"grid\">\n<tr><th></th>");
        for package in context.packages {
            body.push_str(&format!("<th>{}</th>", escape(package.install_name())));
        }
        body.push_str("</tr>\n");

        for (row_idx, row) in context.packages.iter().enumerate() {
            body.push_str(&format!("<tr><th>{}</th>", escape(row.install_name())));
            for col in &context.packages[..=row_idx] {
                let classification = context.results.classify(row, col)?;
                body.push_str(&grid_cell(&classification));
            }
            for _ in row_idx + 1..context.packages.len() {
                body.push_str("<td></td>");
            }
            body.push_str("</tr>\n");
        }
        body.push_str("</table>\n");

        Ok(self.document("Compatibility grid", &body, &context.current_timestamp))
    }

    fn render_main(&self, context: &DashboardContext<'_>) -> Result<String, DashboardError> {
        let stats = &context.statistics;
        let mut body = format!(
            "<ul class=\"statistics\">\n\
             <li>Total packages: {}</li>\n\
             <li>Packages with issues: {}</li>\n\
             <li>Packages with deprecated dependencies: {}</li>\n\
             <li>Packages needing update: {}</li>\n\
             </ul>\n",
            stats.total, stats.with_issues, stats.with_deprecated_deps, stats.needing_update
        );

        body.push_str(
            "<table class=\"packages\">\n\
             <tr><th>Package</th><th>Self check</th><th>Issues</th><th>Deprecated dependencies</th></tr>\n",
        );
        for package in context.packages {
            body.push_str(&self.package_row(package, context)?);
        }
        body.push_str("</table>\n<p><a href=\"grid.html\">Compatibility grid</a></p>\n");

        Ok(self.document(&self.title, &body, &context.current_timestamp))
    }

    fn package_row(
        &self,
        package: &Package,
        context: &DashboardContext<'_>,
    ) -> Result<String, DashboardError> {
        let results = context.results;
        let alone = results.classify(package, package)?;
        let has_issues = results.has_issues(package)?;
        let deprecated = results.index().deprecated_deps_for(package)?;

        Ok(format!(
            "<tr><td>{}</td><td class=\"{}\">{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(package.install_name()),
            alone.status_type,
            label(alone.status_type),
            if has_issues { "yes" } else { "no" },
            escape(&deprecated.deps.join(", ")),
        ))
    }

    fn document(&self, heading: &str, body: &str, timestamp: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n\
             <h1>{heading}</h1>\n{body}<p class=\"timestamp\">Last updated: {timestamp}</p>\n</body>\n</html>\n",
            title = escape(&self.title),
            heading = escape(heading),
            body = body,
            timestamp = escape(timestamp),
        )
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("Package compatibility dashboard")
    }
}

impl DashboardRenderer for HtmlRenderer {
    fn render(
        &self,
        page: DashboardPage,
        context: &DashboardContext<'_>,
    ) -> Result<String, DashboardError> {
        match page {
            DashboardPage::Grid => self.render_grid(context),
            DashboardPage::Main => self.render_main(context),
        }
    }
}

fn grid_cell(classification: &Classification) -> String {
    let details: Vec<String> = classification
        .self_check
        .iter()
        .chain(&classification.pair_check)
        .filter(|entry| !entry.status.is_success())
        .map(|entry| {
            let scope = if entry.is_self { "self" } else { "pairwise" };
            match &entry.details {
                Some(details) => format!("{} {}: {}", scope, entry.status, details),
                None => format!("{} {}", scope, entry.status),
            }
        })
        .collect();

    format!(
        "<td class=\"{}\" title=\"{}\">{}</td>",
        classification.status_type,
        escape(&details.join("\n")),
        label(classification.status_type),
    )
}

fn label(status_type: StatusType) -> &'static str {
    match status_type {
        StatusType::SelfSuccess | StatusType::PairwiseSuccess => "Good",
        StatusType::SelfIssue(crate::Status::Unknown)
        | StatusType::PairwiseIssue(crate::Status::Unknown) => "Unknown",
        StatusType::SelfIssue(_) | StatusType::PairwiseIssue(_) => "Bad",
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
