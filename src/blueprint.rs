//! The document generator: a pure function from an [`EventDescriptor`] to
//! a complete, standalone blueprint HTML page.
//!
//! Every field substitutes a documented placeholder when empty. Scalar
//! fields are HTML-escaped; multi-line fields become sanitized `<li>`
//! lists. Identical descriptors produce byte-identical documents.

use crate::descriptor::EventDescriptor;
use crate::text::{escape_html, lines_to_list_items};

/// External stylesheet reference embedded in the generated page. The
/// inlined export path replaces this exact tag with a `<style>` block.
pub const STYLESHEET_TAG: &str = r#"<link rel="stylesheet" href="styles.css" />"#;

/// External runtime script reference embedded in the generated page. The
/// inlined export path replaces this exact tag with an inline `<script>`.
pub const RUNTIME_TAG: &str = r#"<script src="script.js"></script>"#;

// Placeholders for scalar fields.
pub const DEFAULT_NAME: &str = "Live-Ops Event";
pub const DEFAULT_THEME: &str =
    "Time-boxed live-ops campaign aligned to a key cultural or product moment.";
pub const DEFAULT_DATES: &str = "Dates not set";
pub const DEFAULT_HASHTAG: &str = "#event";
pub const DEFAULT_CORE_ASSETS: &str = "Special in-app virtual items";
pub const DEFAULT_PRIMARY_GOALS: &str =
    "Increase engagement, boost creator earnings, and deepen community participation.";
pub const DEFAULT_TARGET_COHORTS: &str =
    "Define target cohorts such as viewers, gifters, creators, and new users.";
pub const DEFAULT_GROWTH_TARGETS: &str = "+X% DAU uplift on event days";
pub const DEFAULT_MONETISATION_TARGETS: &str = "+Y% gifting uplift; Z% viewers → gifters";
pub const DEFAULT_CREATOR_TARGETS: &str =
    "Meaningful earnings uplift for both top and long-tail creators";
pub const DEFAULT_CRM_NOTES: &str =
    "Outline key CRM cohorts and journeys that support this event across push, in-app, and email.";

// Fallback list items for multi-line fields left empty.
const FALLBACK_PRIMARY_KPIS: &str = "<li>Add primary KPIs in the generator.</li>";
const FALLBACK_SECONDARY_KPIS: &str = "<li>Add secondary KPIs in the generator.</li>";
const FALLBACK_TIMELINE_PRE: &str = "<li>Define pre-event tasks in the generator.</li>";
const FALLBACK_TIMELINE_DURING: &str = "<li>Define during-event flows in the generator.</li>";
const FALLBACK_TIMELINE_POST: &str = "<li>Define post-event wrap-up steps in the generator.</li>";
const FALLBACK_ROOM_FORMATS: &str = "<li>Add live room formats in the generator.</li>";
const FALLBACK_SPECIAL_ITEMS: &str = "<li>Add special items in the generator.</li>";
const FALLBACK_CREATOR_LOGIC: &str = "<li>Define creator leaderboard logic in the generator.</li>";
const FALLBACK_GIFTER_LOGIC: &str = "<li>Define gifter leaderboard logic in the generator.</li>";
const FALLBACK_ANTI_ABUSE: &str = "<li>Define guardrails in the generator.</li>";

/// Escape a scalar field, substituting its placeholder when empty.
fn field_or(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        escape_html(default)
    } else {
        escape_html(value)
    }
}

/// Render a multi-line field as list items, substituting a fixed fallback
/// item when nothing remains after trimming.
fn list_or(value: &str, fallback: &str) -> String {
    let items = lines_to_list_items(value);
    if items.is_empty() {
        fallback.to_string()
    } else {
        items
    }
}

/// Generate the full blueprint document for a descriptor.
pub fn generate(descriptor: &EventDescriptor) -> String {
    let event_name = field_or(&descriptor.event_name, DEFAULT_NAME);
    let event_theme = field_or(&descriptor.event_theme, DEFAULT_THEME);
    let event_dates = field_or(&descriptor.event_dates, DEFAULT_DATES);
    let event_hashtag = field_or(&descriptor.event_hashtag, DEFAULT_HASHTAG);
    let core_assets = field_or(&descriptor.core_assets, DEFAULT_CORE_ASSETS);
    // The goals line always carries a closing period, matching the page copy.
    let primary_goals = field_or(&descriptor.primary_goals, DEFAULT_PRIMARY_GOALS) + ".";
    let target_cohorts = field_or(&descriptor.target_cohorts, DEFAULT_TARGET_COHORTS);
    let growth_targets = field_or(&descriptor.growth_targets, DEFAULT_GROWTH_TARGETS);
    let monetisation_targets =
        field_or(&descriptor.monetisation_targets, DEFAULT_MONETISATION_TARGETS);
    let crm_notes = field_or(&descriptor.crm_notes, DEFAULT_CRM_NOTES);

    let primary_kpi_lis = list_or(&descriptor.primary_kpis, FALLBACK_PRIMARY_KPIS);
    let secondary_kpi_lis = list_or(&descriptor.secondary_kpis, FALLBACK_SECONDARY_KPIS);
    let pre_timeline_lis = list_or(&descriptor.timeline_pre, FALLBACK_TIMELINE_PRE);
    let during_timeline_lis = list_or(&descriptor.timeline_during, FALLBACK_TIMELINE_DURING);
    let post_timeline_lis = list_or(&descriptor.timeline_post, FALLBACK_TIMELINE_POST);
    let room_format_lis = list_or(&descriptor.room_formats, FALLBACK_ROOM_FORMATS);
    let special_item_lis = list_or(&descriptor.special_items, FALLBACK_SPECIAL_ITEMS);
    let creator_logic_lis = list_or(&descriptor.creator_logic, FALLBACK_CREATOR_LOGIC);
    let gifter_logic_lis = list_or(&descriptor.gifter_logic, FALLBACK_GIFTER_LOGIC);
    let anti_abuse_lis = list_or(&descriptor.anti_abuse, FALLBACK_ANTI_ABUSE);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{event_name} — Live-Ops Blueprint</title>
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  {stylesheet_tag}
</head>
<body class="event-page">
  <header class="top-nav">
    <div class="nav-inner container">
      <div class="logo-mark">
        <span class="logo-dot"></span>
        <span class="logo-text">LiveOps Library</span>
      </div>
      <button class="nav-toggle" aria-label="Toggle navigation">☰</button>
      <nav class="nav-links">
        <a href="index.html">Generator</a>
        <a href="#overview">Overview</a>
        <a href="#mechanics">Mechanics</a>
        <a href="#pnl">P&L</a>
        <a href="#crm">CRM</a>
        <a href="#creative">Creatives</a>
      </nav>
    </div>
  </header>

  <main class="container event-layout">
    <aside class="event-sidebar">
      <a href="index.html" class="back-link">&larr; Back to Generator</a>
      <p class="pill pill-latest">Event Blueprint</p>
      <h1>{event_name}</h1>
      <p class="event-subtitle">
        {event_theme}
      </p>

      <div class="event-meta-block">
        <h2>Event Snapshot</h2>
        <dl>
          <div>
            <dt>Theme</dt>
            <dd>{event_theme}</dd>
          </div>
          <div>
            <dt>Dates</dt>
            <dd>{event_dates}</dd>
          </div>
          <div>
            <dt>Hashtag</dt>
            <dd>{event_hashtag}</dd>
          </div>
          <div>
            <dt>Core Asset</dt>
            <dd>{core_assets}</dd>
          </div>
          <div>
            <dt>Primary Goals</dt>
            <dd>{primary_goals}</dd>
          </div>
          <div>
            <dt>Target Cohorts</dt>
            <dd>{target_cohorts}</dd>
          </div>
        </dl>
      </div>

      <div class="event-tags">
        <h2>Tags</h2>
        <ul class="tag-list compact">
          <li>Live-Ops</li>
          <li>Virtual Gifting</li>
          <li>Creator Campaign</li>
        </ul>
      </div>
    </aside>

    <section class="event-main">
      <div class="tab-nav" data-tab-root>
        <button class="tab-link active" data-tab-target="overview">Overview</button>
        <button class="tab-link" data-tab-target="mechanics">Mechanics & Game Logic</button>
        <button class="tab-link" data-tab-target="pnl">P&L Template</button>
        <button class="tab-link" data-tab-target="crm">Cohorts & CRM</button>
        <button class="tab-link" data-tab-target="creative">Creative Checklist</button>
      </div>

      <section id="overview" class="tab-panel active">
        <h2>1. Event Overview</h2>
        <p>
          {event_name} is a live-ops event designed to capitalise on a key moment and drive
          <strong>DAU, time spent, and monetisation</strong>. It combines themed live rooms,
          special limited-time assets, and creator-led challenges into a single, structured campaign.
        </p>

        <div class="cards-inline">
          <article class="mini-card">
            <h3>Primary KPIs</h3>
            <ul>
              {primary_kpi_lis}
            </ul>
          </article>
          <article class="mini-card">
            <h3>Secondary KPIs</h3>
            <ul>
              {secondary_kpi_lis}
            </ul>
          </article>
          <article class="mini-card">
            <h3>Target Cohorts</h3>
            <p style="font-size:0.85rem;">
              {target_cohorts}
            </p>
          </article>
        </div>

        <h3>Event Timeline (Blueprint)</h3>
        <div class="timeline">
          <div class="timeline-item">
            <div class="timeline-badge">Pre-event</div>
            <div class="timeline-content">
              <h4>Preparation</h4>
              <ul>
                {pre_timeline_lis}
              </ul>
            </div>
          </div>
          <div class="timeline-item">
            <div class="timeline-badge">During</div>
            <div class="timeline-content">
              <h4>Live days</h4>
              <ul>
                {during_timeline_lis}
              </ul>
            </div>
          </div>
          <div class="timeline-item">
            <div class="timeline-badge">Post</div>
            <div class="timeline-content">
              <h4>Wrap-up & retro</h4>
              <ul>
                {post_timeline_lis}
              </ul>
            </div>
          </div>
        </div>
      </section>

      <section id="mechanics" class="tab-panel">
        <h2>2. Mechanics & Game Logic</h2>

        <h3>2.1 Live Room Formats</h3>
        <ul class="checklist">
          {room_format_lis}
        </ul>

        <h3>2.2 Special Assets / Gifts</h3>
        <p>Key assets available only during this event window:</p>
        <ul>
          {special_item_lis}
        </ul>

        <div class="cards-inline">
          <article class="mini-card">
            <h3>Creator Leaderboard</h3>
            <ul>
              {creator_logic_lis}
            </ul>
          </article>
          <article class="mini-card">
            <h3>Gifter Leaderboard</h3>
            <ul>
              {gifter_logic_lis}
            </ul>
          </article>
        </div>

        <h3>2.3 Anti-Abuse & Guardrails</h3>
        <ul class="checklist">
          {anti_abuse_lis}
        </ul>
      </section>

      <section id="pnl" class="tab-panel">
        <h2>3. P&L Template</h2>
        <p class="hint">
          Use this table as a starting point. Copy into Sheets / Excel and
          replace assumptions with real values for this specific event.
        </p>
        <div class="table-wrapper">
          <table>
            <thead>
              <tr>
                <th>Line Item</th>
                <th>Assumption / Basis</th>
                <th>Planned</th>
                <th>Actual</th>
              </tr>
            </thead>
            <tbody>
              <tr>
                <td>Projected DAU uplift</td>
                <td>{growth_targets}</td>
                <td></td>
                <td></td>
              </tr>
              <tr>
                <td>Projected gifting revenue</td>
                <td>{monetisation_targets}</td>
                <td></td>
                <td></td>
              </tr>
              <tr>
                <td>Creator reward pool</td>
                <td>Fixed pool + performance bonuses</td>
                <td></td>
                <td></td>
              </tr>
              <tr>
                <td>Marketing budget</td>
                <td>Paid + influencer + barter</td>
                <td></td>
                <td></td>
              </tr>
              <tr>
                <td>Net event margin</td>
                <td>Revenue − rewards − marketing</td>
                <td></td>
                <td></td>
              </tr>
              <tr>
                <td>New paying users acquired</td>
                <td># first-time payers / gifters during event</td>
                <td></td>
                <td></td>
              </tr>
              <tr>
                <td>Blended CAC for new payers</td>
                <td>Marketing / new payers</td>
                <td></td>
                <td></td>
              </tr>
            </tbody>
          </table>
        </div>
      </section>

      <section id="crm" class="tab-panel">
        <h2>4. Cohorts & CRM Journeys</h2>
        <p>
          Use this section to align CRM, Growth, and Product on behaviour-to-action
          mappings. Fill details in the generator and expand them in your CRM tool.
        </p>
        <p style="font-size:0.9rem;">
          {crm_notes}
        </p>
      </section>

      <section id="creative" class="tab-panel">
        <h2>5. Creative & Comms Checklist</h2>
        <p>
          Use this as a ready reckoner for Design, Copy, and Creator Success teams.
        </p>
        <div class="cards-inline">
          <article class="mini-card">
            <h3>Surfaces</h3>
            <ul>
              <li>Home banner for the event</li>
              <li>Category / event tiles</li>
              <li>In-room highlights for special assets</li>
              <li>Creator dashboard announcement card</li>
            </ul>
          </article>
          <article class="mini-card">
            <h3>Copy Hooks</h3>
            <ul>
              <li>Hero line to explain the event in one sentence</li>
              <li>Short CTA for notifications / banners</li>
              <li>Creator-facing explanation of rewards</li>
            </ul>
          </article>
          <article class="mini-card">
            <h3>Creator Toolkit</h3>
            <ul>
              <li>Sample show flow scripts for creators</li>
              <li>Overlay frames or visual elements</li>
              <li>Countdown story / post templates</li>
            </ul>
          </article>
        </div>
        <h3>Asset Links</h3>
        <p class="hint">
          Paste Figma / Drive links here when you use this internally.
        </p>
        <ul>
          <li>Figma file: Event creatives</li>
          <li>Drive folder: Creator communication PDFs</li>
          <li>Sheet: Final rewards & winners list</li>
        </ul>
      </section>
    </section>
  </main>

  <footer class="site-footer">
    <div class="container footer-inner">
      <p>{event_name} &middot; Live-Ops Blueprint</p>
      <p class="footer-meta">
        Generated via the Live-Ops Event Blueprint Generator. Clone this file as
        a template for future events.
      </p>
    </div>
  </footer>

  {runtime_tag}
</body>
</html>
"##,
        event_name = event_name,
        event_theme = event_theme,
        event_dates = event_dates,
        event_hashtag = event_hashtag,
        core_assets = core_assets,
        primary_goals = primary_goals,
        target_cohorts = target_cohorts,
        growth_targets = growth_targets,
        monetisation_targets = monetisation_targets,
        crm_notes = crm_notes,
        primary_kpi_lis = primary_kpi_lis,
        secondary_kpi_lis = secondary_kpi_lis,
        pre_timeline_lis = pre_timeline_lis,
        during_timeline_lis = during_timeline_lis,
        post_timeline_lis = post_timeline_lis,
        room_format_lis = room_format_lis,
        special_item_lis = special_item_lis,
        creator_logic_lis = creator_logic_lis,
        gifter_logic_lis = gifter_logic_lis,
        anti_abuse_lis = anti_abuse_lis,
        stylesheet_tag = STYLESHEET_TAG,
        runtime_tag = RUNTIME_TAG,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_defaults_every_empty_field() {
        let html = generate(&EventDescriptor::default());
        for placeholder in [
            DEFAULT_DATES,
            DEFAULT_HASHTAG,
            DEFAULT_CORE_ASSETS,
            DEFAULT_GROWTH_TARGETS,
            FALLBACK_PRIMARY_KPIS,
            FALLBACK_ANTI_ABUSE,
        ] {
            let escaped = crate::text::escape_html(placeholder);
            // Fallback list items are injected verbatim, scalar defaults escaped
            assert!(
                html.contains(placeholder) || html.contains(&escaped),
                "missing placeholder: {}",
                placeholder
            );
        }
    }

    #[test]
    fn test_generate_escapes_interpolated_text() {
        let descriptor = EventDescriptor {
            event_name: "<Neon> & \"Nights\"".to_string(),
            ..Default::default()
        };
        let html = generate(&descriptor);
        assert!(html.contains("&lt;Neon&gt; &amp; &quot;Nights&quot;"));
        assert!(!html.contains("<Neon>"));
    }

    #[test]
    fn test_generate_is_pure() {
        let descriptor = EventDescriptor {
            event_name: "Neon Nights".to_string(),
            primary_kpis: "DAU\nGifting revenue".to_string(),
            ..Default::default()
        };
        assert_eq!(generate(&descriptor), generate(&descriptor));
    }

    #[test]
    fn test_generate_embeds_external_references() {
        let html = generate(&EventDescriptor::default());
        assert!(html.contains(STYLESHEET_TAG));
        assert!(html.contains(RUNTIME_TAG));
    }
}
