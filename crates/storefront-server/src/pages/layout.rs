use super::escape_html;

pub const STORE_NAME: &str = "E-commerce Store";

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#111827;background:#fff}\
a{color:inherit;text-decoration:none}\
.container{max-width:1200px;margin:0 auto;padding:2rem 1rem}\
header{border-bottom:1px solid #e5e7eb}\
header nav{display:flex;gap:1.5rem;align-items:center}\
.brand{font-weight:700;font-size:1.25rem;margin-right:auto}\
main{min-height:100vh}\
footer{background:#f3f4f6;color:#4b5563;text-align:center;padding:2rem 1rem;margin-top:3rem}\
.hero{background:linear-gradient(to right,#2563eb,#1e40af);color:#fff;border-radius:1rem;padding:3rem;margin-bottom:3rem}\
.button{display:inline-block;background:#2563eb;color:#fff;padding:.75rem 2rem;border:0;border-radius:.5rem;font-weight:600}\
.button:disabled{background:#d1d5db;cursor:not-allowed}\
.hero .button{background:#fff;color:#1d4ed8}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:1.5rem}\
.card{border:1px solid #e5e7eb;border-radius:.75rem;overflow:hidden;display:block}\
.thumb-wrap{position:relative;aspect-ratio:1;background:#f3f4f6}\
.thumb,.hero-image{width:100%;height:100%;object-fit:cover}\
.placeholder{width:4rem;height:4rem;margin:auto;display:block;color:#9ca3af}\
.overlay{position:absolute;inset:0;background:rgba(0,0,0,.5);color:#fff;display:flex;align-items:center;justify-content:center}\
.card-body{padding:1rem}\
.price{color:#2563eb;font-weight:700}\
.muted{color:#6b7280}\
.badge{display:inline-block;padding:.25rem .75rem;border-radius:9999px;font-size:.875rem;background:#f3f4f6}\
.badge.in-stock{background:#dcfce7;color:#166534}\
.badge.out-of-stock{background:#fee2e2;color:#991b1b}\
.filters{display:flex;flex-wrap:wrap;gap:.5rem;margin-bottom:2rem}\
.empty{text-align:center;padding:3rem 0}\
.detail{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:3rem}\
";

/// Document-level metadata for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

impl PageMeta {
    #[must_use]
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// Title of the form `"{section} | E-commerce Store"`.
    #[must_use]
    pub fn section(section: &str, description: Option<String>) -> Self {
        Self::new(format!("{section} | {STORE_NAME}"), description)
    }
}

/// Wraps page content in the shared document shell: head, header
/// navigation, main and footer.
#[must_use]
pub fn render_layout(meta: &PageMeta, content: &str, year: i32) -> String {
    let description = meta.description.as_deref().map_or_else(String::new, |d| {
        format!(r#"<meta name="description" content="{}">"#, escape_html(d))
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{description}
<style>{STYLESHEET}</style>
</head>
<body>
<header><nav class="container"><a class="brand" href="/">{store}</a><a href="/">Home</a><a href="/products">Products</a></nav></header>
<main>{content}</main>
<footer><p>&copy; {year} {store}. All rights reserved.</p></footer>
</body>
</html>
"#,
        title = escape_html(&meta.title),
        store = STORE_NAME,
    )
}
