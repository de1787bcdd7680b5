//! Landing page route.
//!
//! Serves the marketing page at `/`: the service catalog and the lead form.
//! The form script keeps its own state (text fields, the set of checked
//! services, and a submit status of idle/loading/success/error) and posts
//! JSON to `/api/lead`. The only client-side validation is the browser's
//! native `required` handling; the API revalidates everything.

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use maud::{html, Markup};

use alfox_core::catalog::SERVICE_CATALOG;

use crate::state::AppState;

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(landing_page))
}

async fn landing_page() -> Html<String> {
    Html(render_landing_page())
}

/// Assemble the full landing page document.
#[must_use]
pub fn render_landing_page() -> String {
    let body = LANDING_BODY
        .replace("{{SERVICE_GRID}}", &service_grid().into_string())
        .replace("{{SERVICE_OPTIONS}}", &service_options().into_string());

    let mut html = String::with_capacity(LANDING_CSS.len() + body.len() + LANDING_SCRIPT.len());
    html.push_str(LANDING_CSS);
    html.push_str(&body);
    html.push_str(LANDING_SCRIPT);
    html
}

/// "Our Services" cards.
fn service_grid() -> Markup {
    html! {
        @for service in SERVICE_CATALOG {
            div class="service" {
                span class="dot" {}
                p { (service) }
            }
        }
    }
}

/// One checkbox per catalog entry for the form.
fn service_options() -> Markup {
    html! {
        @for service in SERVICE_CATALOG {
            label class="option" {
                input type="checkbox" name="services" value=(service);
                span { (service) }
            }
        }
    }
}

/// CSS and HTML head for the landing page.
const LANDING_CSS: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Alfox.ai &mdash; Innovative Technology Solutions</title>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--text:#fff;--muted:#d1d5db;--accent:#c084fc;--glass:rgba(255,255,255,.1);--glass-soft:rgba(255,255,255,.05);--border:rgba(255,255,255,.2);--font:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif}
body{font-family:var(--font);min-height:100vh;background:linear-gradient(135deg,#0f172a,#581c87,#0f172a);color:var(--text);line-height:1.6;-webkit-font-smoothing:antialiased}
.container{max-width:896px;margin:0 auto;padding:48px 16px}
.header{text-align:center;margin-bottom:48px}
.header h1{font-size:48px;font-weight:700;margin-bottom:16px}
.header h1 span{color:var(--accent)}
.header p{font-size:20px;color:var(--muted)}
.panel{background:var(--glass);backdrop-filter:blur(16px);border-radius:16px;padding:32px;margin-bottom:32px;box-shadow:0 25px 50px -12px rgba(0,0,0,.5)}
.panel h2{font-size:30px;font-weight:700;margin-bottom:24px}
.services{display:grid;grid-template-columns:repeat(3,1fr);gap:16px}
.service{display:flex;align-items:flex-start;gap:12px;background:var(--glass-soft);border-radius:8px;padding:16px;transition:background .2s}
.service:hover{background:var(--glass)}
.service .dot{flex-shrink:0;width:8px;height:8px;margin-top:8px;border-radius:50%;background:var(--accent)}
.service p{font-size:14px;color:#e5e7eb}
.form{display:flex;flex-direction:column;gap:24px}
.fields{display:grid;grid-template-columns:repeat(2,1fr);gap:24px}
.form label.field{display:block;color:#e5e7eb;font-weight:500;margin-bottom:8px}
.form input[type=text],.form input[type=email],.form input[type=tel],.form textarea{width:100%;padding:12px 16px;border-radius:8px;background:var(--glass);border:1px solid var(--border);color:var(--text);font:inherit}
.form input::placeholder,.form textarea::placeholder{color:#9ca3af}
.form input:focus,.form textarea:focus{outline:none;box-shadow:0 0 0 2px var(--accent)}
.options{display:grid;grid-template-columns:repeat(2,1fr);gap:12px}
.option{display:flex;align-items:center;gap:12px;cursor:pointer;color:#e5e7eb}
.option:hover{color:var(--text)}
.option input{width:20px;height:20px;accent-color:var(--accent)}
.status{padding:16px;border-radius:8px}
.status[hidden]{display:none}
.status.loading{background:rgba(59,130,246,.2);border:1px solid rgba(59,130,246,.5);color:#bfdbfe}
.status.success{background:rgba(34,197,94,.2);border:1px solid rgba(34,197,94,.5);color:#bbf7d0}
.status.error{background:rgba(239,68,68,.2);border:1px solid rgba(239,68,68,.5);color:#fecaca}
.submit{width:100%;padding:16px 24px;border:none;border-radius:8px;background:linear-gradient(90deg,#a855f7,#4f46e5);color:#fff;font:inherit;font-weight:600;cursor:pointer;box-shadow:0 10px 15px -3px rgba(0,0,0,.3);transition:all .2s}
.submit:hover{background:linear-gradient(90deg,#9333ea,#4338ca)}
.submit:disabled{opacity:.5;cursor:not-allowed}
.footer{text-align:center;margin-top:48px;color:#9ca3af}
@media(max-width:768px){.services,.fields,.options{grid-template-columns:1fr}.header h1{font-size:36px}}
</style></head>
"##;

/// HTML body for the landing page. `{{SERVICE_GRID}}` and
/// `{{SERVICE_OPTIONS}}` are filled from the catalog.
const LANDING_BODY: &str = r##"<body>
<main class="container">
  <div class="header">
    <h1>Alfox<span>.ai</span></h1>
    <p>Innovative Technology Solutions for Your Business</p>
  </div>
  <section class="panel">
    <h2>Our Services</h2>
    <div class="services">{{SERVICE_GRID}}</div>
  </section>
  <section class="panel">
    <h2>Get Started Today</h2>
    <form id="lead-form" class="form">
      <div class="fields">
        <div><label class="field" for="name">Name *</label><input id="name" name="name" type="text" required placeholder="John Doe"/></div>
        <div><label class="field" for="email">Email *</label><input id="email" name="email" type="email" required placeholder="john@company.com"/></div>
        <div><label class="field" for="company">Company *</label><input id="company" name="company" type="text" required placeholder="Your Company"/></div>
        <div><label class="field" for="phone">Phone</label><input id="phone" name="phone" type="tel" placeholder="+1 (555) 123-4567"/></div>
      </div>
      <div>
        <label class="field">Services of Interest *</label>
        <div class="options">{{SERVICE_OPTIONS}}</div>
      </div>
      <div><label class="field" for="message">Message</label><textarea id="message" name="message" rows="4" placeholder="Tell us about your project..."></textarea></div>
      <div id="lead-status" class="status" hidden></div>
      <button id="lead-submit" type="submit" class="submit" disabled>Submit Inquiry</button>
    </form>
  </section>
  <div class="footer"><p>&copy; 2024 Alfox.ai - Innovative Technology Solutions</p></div>
</main>
"##;

/// Form controller. Status is one of idle, loading, success, error.
const LANDING_SCRIPT: &str = r##"<script>
(function () {
  var form = document.getElementById('lead-form');
  var statusBox = document.getElementById('lead-status');
  var submit = document.getElementById('lead-submit');
  var boxes = Array.prototype.slice.call(form.querySelectorAll('input[name=services]'));
  var state = { status: 'idle', message: '', services: [] };

  function render() {
    var loading = state.status === 'loading';
    statusBox.hidden = state.status === 'idle';
    statusBox.className = 'status ' + state.status;
    statusBox.textContent = loading ? 'Submitting...' : state.message;
    submit.disabled = loading || state.services.length === 0;
    submit.textContent = loading ? 'Submitting...' : 'Submit Inquiry';
  }

  function toggle(service) {
    var at = state.services.indexOf(service);
    if (at === -1) { state.services.push(service); } else { state.services.splice(at, 1); }
    render();
  }

  function field(id) { return document.getElementById(id).value; }

  boxes.forEach(function (box) {
    box.addEventListener('change', function () { toggle(box.value); });
  });

  form.addEventListener('submit', function (e) {
    e.preventDefault();
    state.status = 'loading';
    state.message = '';
    render();

    var payload = {
      name: field('name'),
      email: field('email'),
      company: field('company'),
      phone: field('phone'),
      services: state.services.slice(),
      message: field('message')
    };

    fetch('/api/lead', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    }).then(function (response) {
      return response.json().catch(function (err) {
        if (response.ok) { throw err; }
        return {};
      }).then(function (data) {
        if (response.ok) {
          state.status = 'success';
          state.message = "Thank you! We'll contact you shortly.";
          form.reset();
          state.services = [];
        } else {
          state.status = 'error';
          state.message = data.error || 'Something went wrong. Please try again.';
        }
        render();
      });
    }).catch(function () {
      state.status = 'error';
      state.message = 'Network error. Please try again.';
      render();
    });
  });

  render();
})();
</script>
</body></html>
"##;
