//! 派生画像を参照する `<picture>` マークアップ
//!
//! ブラウザは上から順にデコードできる形式を選ぶので、圧縮効率の高い
//! AVIF → WebP → 元のJPEG の順に並べる。3つのURLはベース名を共有し、
//! 拡張子だけが異なる。

use crate::types::DerivativeFormat;

/// `<picture>` の候補1つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureSource {
    pub url: String,
    pub mime_type: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Eager,
    Lazy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPriority {
    High,
    Low,
    Auto,
}

/// `<picture>` の描画オプション
#[derive(Debug, Clone, Default)]
pub struct PictureOptions<'a> {
    pub class: Option<&'a str>,
    pub img_class: Option<&'a str>,
    pub loading: Option<Loading>,
    pub fetch_priority: Option<FetchPriority>,
    pub sizes: Option<&'a str>,
}

// 優先順の候補一覧（最後がフォールバック）
pub fn picture_sources(base_url: &str, name: &str) -> [PictureSource; 3] {
    let url = |ext: &str| format!("{}{}.{}", base_url, name, ext);
    [
        PictureSource {
            url: url(DerivativeFormat::Avif.extension()),
            mime_type: DerivativeFormat::Avif.mime_type(),
        },
        PictureSource {
            url: url(DerivativeFormat::Webp.extension()),
            mime_type: DerivativeFormat::Webp.mime_type(),
        },
        PictureSource {
            url: url("jpg"),
            mime_type: "image/jpeg",
        },
    ]
}

pub fn render_picture(base_url: &str, name: &str, alt: &str, options: &PictureOptions<'_>) -> String {
    let [avif, webp, fallback] = picture_sources(base_url, name);
    let sizes = options
        .sizes
        .map(|s| format!(" sizes=\"{}\"", escape_attr(s)))
        .unwrap_or_default();

    let mut html = String::new();
    match options.class {
        Some(class) => html.push_str(&format!("<picture class=\"{}\">", escape_attr(class))),
        None => html.push_str("<picture>"),
    }

    for source in [&avif, &webp] {
        html.push_str(&format!(
            "<source srcset=\"{}\" type=\"{}\"{}>",
            escape_attr(&source.url),
            source.mime_type,
            sizes
        ));
    }

    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\"",
        escape_attr(&fallback.url),
        escape_attr(alt)
    ));
    if let Some(class) = options.img_class {
        html.push_str(&format!(" class=\"{}\"", escape_attr(class)));
    }
    if let Some(loading) = options.loading {
        let value = match loading {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        };
        html.push_str(&format!(" loading=\"{}\"", value));
    }
    html.push_str(" decoding=\"async\"");
    if let Some(priority) = options.fetch_priority {
        let value = match priority {
            FetchPriority::High => "high",
            FetchPriority::Low => "low",
            FetchPriority::Auto => "auto",
        };
        html.push_str(&format!(" fetchpriority=\"{}\"", value));
    }
    html.push_str(&sizes);
    html.push_str("></picture>");

    html
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_share_base_name_in_preference_order() {
        let sources = picture_sources("/academy/", "hero");
        let urls: Vec<&str> = sources.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["/academy/hero.avif", "/academy/hero.webp", "/academy/hero.jpg"]);
        assert_eq!(sources[0].mime_type, "image/avif");
        assert_eq!(sources[2].mime_type, "image/jpeg");
    }

    #[test]
    fn renders_minimal_picture() {
        let html = render_picture("/", "team", "Our coaches", &PictureOptions::default());
        assert_eq!(
            html,
            "<picture>\
             <source srcset=\"/team.avif\" type=\"image/avif\">\
             <source srcset=\"/team.webp\" type=\"image/webp\">\
             <img src=\"/team.jpg\" alt=\"Our coaches\" decoding=\"async\">\
             </picture>"
        );
    }

    #[test]
    fn renders_hints_and_escapes_attributes() {
        let options = PictureOptions {
            class: Some("hero"),
            img_class: None,
            loading: Some(Loading::Eager),
            fetch_priority: Some(FetchPriority::High),
            sizes: Some("100vw"),
        };
        let html = render_picture("/", "hero", "Beam & \"floor\"", &options);
        assert!(html.starts_with("<picture class=\"hero\">"));
        assert!(html.contains("<source srcset=\"/hero.avif\" type=\"image/avif\" sizes=\"100vw\">"));
        assert!(html.contains("alt=\"Beam &amp; &quot;floor&quot;\""));
        assert!(html.contains(" loading=\"eager\" decoding=\"async\" fetchpriority=\"high\" sizes=\"100vw\">"));
    }
}
