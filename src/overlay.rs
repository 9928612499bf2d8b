use crate::constants::STATS_ELEMENT_ID;
use card_core::FrameMetrics;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATS_ELEMENT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATS_ELEMENT_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    match document.get_element_by_id(STATS_ELEMENT_ID) {
        Some(el) => {
            el.class_list().contains("hidden")
                || el
                    .get_attribute("style")
                    .is_some_and(|s| s.contains("display:none"))
        }
        None => true,
    }
}

/// Returns true when the overlay is now visible.
#[inline]
pub fn toggle(document: &web::Document) -> bool {
    if is_hidden(document) {
        show(document);
        true
    } else {
        hide(document);
        false
    }
}

/// Write the latest frame metrics into the stats overlay.
pub fn update_stats(document: &web::Document, metrics: FrameMetrics, avg_frame_ms: f64, zoom: f32) {
    if let Some(el) = document.get_element_by_id(STATS_ELEMENT_ID) {
        el.set_inner_html(&stats_html(metrics, avg_frame_ms, zoom));
    }
}

fn stats_html(m: FrameMetrics, avg_frame_ms: f64, zoom: f32) -> String {
    format!(
        "<div style='color: #cfe7ff; font: 12px ui-monospace, monospace; background: rgba(10, 14, 24, 0.8); padding: 6px 10px; border-radius: 6px;'>{} fps • {:.1} ms/frame • work {:.2} ms • {} rot updates • zoom {:.2}×</div>",
        m.fps, m.frame_time_ms, avg_frame_ms, m.updates, zoom
    )
}
