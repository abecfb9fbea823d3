//! Bodies of every file the scaffolder and sample generator write.
//!
//! The layout is assembled from static chunks plus a mode-dependent
//! asset-include section; everything else is fixed text.

use govkit_core::frontend;
use govkit_core::types::AssetMode;

/// Quote a string for safe inclusion in double-quoted YAML.
///
/// Site names come from the command line; a bare colon or leading special
/// character would otherwise change the document's meaning.
fn yaml_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Wrap a site-relative path in Jekyll's `relative_url` filter.
fn relative_url(path: &str) -> String {
    format!("{{{{ '{}' | relative_url }}}}", path)
}

/// Jekyll `_config.yml` declaring the site metadata.
pub fn config_yml(site_name: &str) -> String {
    let mut yml = String::from("# Site settings\n");
    yml.push_str(&format!("title: {}\n", yaml_quote(site_name)));
    yml.push_str(
        r##"email: your-email@example.com
description: >-
  A Jekyll site using the GOV.UK Frontend design system.
baseurl: "" # the subpath of your site, e.g. /blog
url: "" # the base hostname & protocol for your site, e.g. http://example.com

# Build settings
markdown: kramdown
plugins:
  - jekyll-feed

# Exclude from processing
exclude:
  - .sass-cache/
  - .jekyll-cache/
  - gemfiles/
  - Gemfile
  - Gemfile.lock
  - node_modules/
  - vendor/bundle/
  - vendor/cache/
  - vendor/gems/
  - vendor/ruby/
"##,
    );
    yml
}

/// Gemfile pinning Jekyll and its plugins.
pub fn gemfile() -> &'static str {
    r##"source "https://rubygems.org"

gem "jekyll", "~> 4.2"
gem "webrick", "~> 1.7"
gem "jekyll-feed", "~> 0.12"

# Windows and JRuby does not include zoneinfo files, so bundle the tzinfo-data gem
# and associated library.
platforms :mingw, :x64_mingw, :mswin, :jruby do
  gem "tzinfo", "~> 1.2"
  gem "tzinfo-data"
end

# Performance-booster for watching directories on Windows
gem "wdm", "~> 0.1.1", :platforms => [:mingw, :x64_mingw, :mswin]
"##
}

/// Stub stylesheet for site-specific overrides (self-hosted mode only).
pub fn custom_css() -> &'static str {
    r##"---
---
/* Custom styles for the GOV.UK Frontend Jekyll site */

/* Add your custom styles below */
"##
}

const LAYOUT_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en" class="govuk-template">
  <head>
    <meta charset="utf-8">
    <title>{% if page.title %}{{ page.title }} - {% endif %}{{ site.title }}</title>
    <meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover">
    <meta name="theme-color" content="#0b0c0c">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">

"##;

const LAYOUT_BODY: &str = r##"  </head>
  <body class="govuk-template__body">
    <script>document.body.className = ((document.body.className) ? document.body.className + ' js-enabled' : 'js-enabled');</script>

    <a href="#main-content" class="govuk-skip-link">Skip to main content</a>

    <header class="govuk-header" role="banner" data-module="govuk-header">
      <div class="govuk-header__container govuk-width-container">
        <div class="govuk-header__logo">
          <a href="{{ '/' | relative_url }}" class="govuk-header__link govuk-header__link--homepage">
            <span class="govuk-header__logotype">
              <svg aria-hidden="true" focusable="false" class="govuk-header__logotype-crown" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 132 97" height="30" width="36">
                <path fill="currentColor" fill-rule="evenodd" d="M25 30.2c3.5 1.5 7.7-.2 9.1-3.7 1.5-3.6-.2-7.8-3.9-9.2-3.6-1.4-7.6.3-9.1 3.9-1.4 3.5.3 7.5 3.9 9zM9 39.5c3.6 1.5 7.8-.2 9.2-3.7 1.5-3.6-.2-7.8-3.9-9.1-3.6-1.5-7.6.2-9.1 3.8-1.4 3.5.3 7.5 3.8 9zM4.4 57.2c3.5 1.5 7.7-.2 9.1-3.8 1.5-3.6-.2-7.7-3.9-9.1-3.5-1.5-7.6.3-9.1 3.8-1.4 3.5.3 7.6 3.9 9.1zm38.3-21.4c3.5 1.5 7.7-.2 9.1-3.8 1.5-3.6-.2-7.7-3.9-9.1-3.6-1.5-7.6.3-9.1 3.8-1.3 3.6.4 7.7 3.9 9.1zm64.4-5.6c-3.6 1.5-7.8-.2-9.1-3.7-1.5-3.6.2-7.8 3.8-9.2 3.6-1.4 7.7.3 9.2 3.9 1.3 3.5-.4 7.5-3.9 9zm15.9 9.3c-3.6 1.5-7.7-.2-9.1-3.7-1.5-3.6.2-7.8 3.7-9.1 3.6-1.5 7.7.2 9.2 3.8 1.5 3.5-.3 7.5-3.8 9zm4.7 17.7c-3.6 1.5-7.8-.2-9.2-3.8-1.5-3.6.2-7.7 3.9-9.1 3.6-1.5 7.7.3 9.2 3.8 1.3 3.5-.4 7.6-3.9 9.1zM89.3 35.8c-3.6 1.5-7.8-.2-9.2-3.8-1.4-3.6.2-7.7 3.9-9.1 3.6-1.5 7.7.3 9.2 3.8 1.4 3.6-.3 7.7-3.9 9.1zM69.7 17.7l8.9 4.7V9.3l-8.9 2.8c-.2-.3-.5-.6-.9-.9L72.4 0H59.6l3.5 11.2c-.3.3-.6.5-.9.9l-8.8-2.8v13.1l8.8-4.7c.3.3.6.7.9.9l-5 15.4v.1c-.2.8-.4 1.6-.4 2.4 0 4.1 3.1 7.5 7 8.1h.2c.3 0 .7.1 1 .1.4 0 .7 0 1-.1h.2c4-.6 7.1-4.1 7.1-8.1 0-.8-.1-1.7-.4-2.4V34l-5.1-15.4c.4-.2.7-.6 1-.9zM66 92.8c16.9 0 32.8 1.1 47.1 3.2 4-16.9 8.9-26.7 14-33.5l-9.6-3.4c1 4.9 1.1 7.2 0 10.2-1.5-1.4-3-4.3-4.2-8.7L108.6 76c2.8-2 5-3.2 7.5-3.3-4.4 9.4-10 11.9-13.6 11.2-4.3-.8-6.3-4.6-5.6-7.9 1-4.7 5.7-5.9 8-.5 4.3-8.7-3-11.4-7.6-8.8 7.1-7.2 7.9-13.5 2.1-21.1-8 6.1-8.1 12.3-4.5 20.8-4.7-5.4-12.1-2.5-9.5 6.2 3.4-5.2 7.9-2 7.2 3.1-.6 4.3-6.4 7.8-13.5 7.2-10.3-.9-10.9-8-11.2-13.8 2.5-.5 7.1 1.8 11 7.3L80.2 60c-4.1 4.4-8 5.3-12.3 5.4 1.4-4.4 8-11.6 8-11.6H55.5s6.4 7.2 7.9 11.6c-4.2-.1-8-1-12.3-5.4l1.4 16.4c3.9-5.5 8.5-7.7 10.9-7.3-.3 5.8-.9 12.8-11.1 13.8-7.2.6-12.9-2.9-13.5-7.2-.7-5 3.8-8.3 7.1-3.1 2.7-8.7-4.6-11.6-9.4-6.2 3.7-8.5 3.6-14.7-4.6-20.8-5.8 7.6-5 13.9 2.2 21.1-4.7-2.6-11.9.1-7.7 8.8 2.3-5.5 7.1-4.2 8.1.5.7 3.3-1.3 7.1-5.7 7.9-3.5.7-9-1.8-13.5-11.2 2.5.1 4.7 1.3 7.5 3.3l-4.7-15.4c-1.2 4.4-2.7 7.2-4.3 8.7-1.1-3-.9-5.3 0-10.2l-9.5 3.4c5 6.9 9.9 16.7 14 33.5 14.8-2.1 30.8-3.2 47.7-3.2z"></path>
              </svg>
              <span class="govuk-header__logotype-text">
                GOV.UK
              </span>
            </span>
          </a>
        </div>
        <div class="govuk-header__content">
          <a href="{{ '/' | relative_url }}" class="govuk-header__link govuk-header__link--service-name">
            {{ site.title }}
          </a>
        </div>
      </div>
    </header>

    <div class="govuk-width-container">
      {% if page.show_phase_banner %}
      <div class="govuk-phase-banner">
        <p class="govuk-phase-banner__content">
          <strong class="govuk-tag govuk-phase-banner__content__tag">
            {{ page.phase | default: "alpha" }}
          </strong>
          <span class="govuk-phase-banner__text">
            This is a new service – your <a class="govuk-link" href="#">feedback</a> will help us to improve it.
          </span>
        </p>
      </div>
      {% endif %}

      {% if page.show_back_link %}
      <a href="javascript:window.history.back()" class="govuk-back-link">Back</a>
      {% endif %}

      <main class="govuk-main-wrapper" id="main-content" role="main">
        {{ content }}
      </main>
    </div>

    <footer class="govuk-footer" role="contentinfo">
      <div class="govuk-width-container">
        <div class="govuk-footer__meta">
          <div class="govuk-footer__meta-item govuk-footer__meta-item--grow">
            <h2 class="govuk-visually-hidden">Support links</h2>
            <ul class="govuk-footer__inline-list">
              <li class="govuk-footer__inline-list-item">
                <a class="govuk-footer__link" href="#">
                  Help
                </a>
              </li>
              <li class="govuk-footer__inline-list-item">
                <a class="govuk-footer__link" href="#">
                  Privacy
                </a>
              </li>
              <li class="govuk-footer__inline-list-item">
                <a class="govuk-footer__link" href="#">
                  Cookies
                </a>
              </li>
              <li class="govuk-footer__inline-list-item">
                <a class="govuk-footer__link" href="#">
                  Accessibility statement
                </a>
              </li>
            </ul>

            <svg aria-hidden="true" focusable="false" class="govuk-footer__licence-logo" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 483.2 195.7" height="17" width="41">
              <path fill="currentColor" d="M421.5 142.8V.1l-50.7 32.3v161.1h112.4v-50.7zm-122.3-9.6A47.12 47.12 0 0 1 221 97.8c0-26 21.1-47.1 47.1-47.1 16.7 0 31.4 8.7 39.7 21.8l42.7-27.2A97.63 97.63 0 0 0 268.1 0c-36.5 0-68.3 20.1-85.1 49.7A98 98 0 0 0 97.8 0C43.9 0 0 43.9 0 97.8s43.9 97.8 97.8 97.8c36.5 0 68.3-20.1 85.1-49.7a97.76 97.76 0 0 0 149.6 25.4l19.4 22.2h3v-87.8h-80l24.3 27.5zM97.8 145c-26 0-47.1-21.1-47.1-47.1s21.1-47.1 47.1-47.1 47.2 21 47.2 47S123.8 145 97.8 145"></path>
            </svg>
            <span class="govuk-footer__licence-description">
              All content is available under the
              <a class="govuk-footer__link" href="https://www.nationalarchives.gov.uk/doc/open-government-licence/version/3/" rel="license">Open Government Licence v3.0</a>, except where otherwise stated
            </span>
          </div>
          <div class="govuk-footer__meta-item">
            <a class="govuk-footer__link govuk-footer__copyright-logo" href="https://www.nationalarchives.gov.uk/information-management/re-using-public-sector-information/uk-government-licensing-framework/crown-copyright/">© Crown copyright</a>
          </div>
        </div>
      </div>
    </footer>
"##;

/// The shared page layout.
///
/// The asset-include section holds exactly one of two snippets: CDN link
/// tags, or `relative_url` references into the local asset tree (plus the
/// custom stylesheet, which only exists when self-hosting).
pub fn layout_html(mode: AssetMode, version: &str) -> String {
    let (stylesheet_href, script_href, favicon_href, mask_icon_href, touch_icon_href) = match mode {
        AssetMode::Cdn => (
            frontend::cdn_stylesheet(version),
            frontend::cdn_script(version),
            format!("{}/dist/assets/images/favicon.ico", frontend::cdn_base(version)),
            format!("{}/dist/assets/images/govuk-icon-mask.svg", frontend::cdn_base(version)),
            format!("{}/dist/assets/images/govuk-icon-180.png", frontend::cdn_base(version)),
        ),
        AssetMode::SelfHosted => (
            relative_url(&format!("/assets/css/{}", frontend::stylesheet_name(version))),
            relative_url(&format!("/assets/js/{}", frontend::script_name(version))),
            relative_url("/assets/images/favicon.ico"),
            relative_url("/assets/images/govuk-icon-mask.svg"),
            relative_url("/assets/images/govuk-icon-180.png"),
        ),
    };

    let mut html = String::with_capacity(LAYOUT_HEAD.len() + LAYOUT_BODY.len() + 1024);
    html.push_str(LAYOUT_HEAD);

    html.push_str("    <!-- Load GOV.UK Frontend CSS -->\n");
    html.push_str(&format!(
        "    <link rel=\"stylesheet\" href=\"{}\">\n",
        stylesheet_href
    ));

    if mode.is_self_hosted() {
        html.push_str("\n    <!-- Load custom CSS -->\n");
        html.push_str(
            "    <link rel=\"stylesheet\" href=\"{{ '/assets/css/custom.css' | relative_url }}\">\n",
        );
    }

    html.push_str("\n    <!-- Favicons -->\n");
    html.push_str(&format!(
        "    <link rel=\"shortcut icon\" href=\"{}\" type=\"image/x-icon\">\n",
        favicon_href
    ));
    html.push_str(&format!(
        "    <link rel=\"mask-icon\" href=\"{}\" color=\"#0b0c0c\">\n",
        mask_icon_href
    ));
    html.push_str(&format!(
        "    <link rel=\"apple-touch-icon\" href=\"{}\">\n",
        touch_icon_href
    ));

    html.push_str(LAYOUT_BODY);

    html.push_str("\n    <!-- Load GOV.UK Frontend JavaScript -->\n");
    html.push_str(&format!("    <script src=\"{}\"></script>\n", script_href));
    html.push_str("    <script>window.GOVUKFrontend.initAll()</script>\n  </body>\n</html>\n");

    html
}

/// Landing page linking to the sample pages.
pub fn index_page() -> &'static str {
    r##"---
layout: govuk-default
title: Home
---

<div class="govuk-grid-row">
  <div class="govuk-grid-column-two-thirds">
    <h1 class="govuk-heading-xl">GOV.UK Frontend with Jekyll</h1>

    <p class="govuk-body-l">This is a sample site demonstrating GOV.UK Frontend components with Jekyll.</p>

    <p class="govuk-body">This site uses the GOV.UK Frontend files to provide the styling and components.</p>

    <h2 class="govuk-heading-m">Sample pages</h2>

    <ul class="govuk-list govuk-list--bullet">
      <li><a href="start-page" class="govuk-link">Start page example</a></li>
      <li><a href="question-page" class="govuk-link">Question page example</a></li>
      <li><a href="components" class="govuk-link">Component examples</a></li>
    </ul>

    <a href="start-page" role="button" draggable="false" class="govuk-button govuk-button--start" data-module="govuk-button">
      Start now
      <svg class="govuk-button__start-icon" xmlns="http://www.w3.org/2000/svg" width="17.5" height="19" viewBox="0 0 33 40" aria-hidden="true" focusable="false">
        <path fill="currentColor" d="M0 0h13l20 20-20 20H0l20-20z" />
      </svg>
    </a>
  </div>
</div>
"##
}

/// README with version info and getting-started steps.
pub fn readme(site_name: &str, mode: AssetMode, version: &str) -> String {
    let today = chrono::Local::now().format("%Y-%m-%d");

    format!(
        r##"# {site_name}

This directory contains a Jekyll site with GOV.UK Frontend integration using {mode} assets.

## Version Information
- GOV.UK Frontend version: v{version}
- Created: {today}
- Asset mode: {mode}

## Getting Started

1. Install Jekyll and Bundler:
   ```
   gem install jekyll bundler
   ```

2. Install dependencies:
   ```
   bundle install --path vendor/bundle
   ```

3. Start the Jekyll server:
   ```
   bundle exec jekyll serve
   ```

4. View the site at [http://localhost:4000](http://localhost:4000)

## Sample pages

Run `govkit generate-samples .` in this directory to add pages demonstrating
GOV.UK Frontend components:

- Start page example
- Question page example
- Component examples page

For more information on available components, refer to the [GOV.UK Design System](https://design-system.service.gov.uk/components/).

## Customization

You can customize this site by:

1. Editing the `_config.yml` file to change site settings
2. Modifying the layout in `_layouts/govuk-default.html`
3. Creating new pages using the GOV.UK Frontend components
"##,
        site_name = site_name,
        mode = mode.as_str(),
        version = frontend::bare_version(version),
        today = today,
    )
}

/// Sample start page.
pub fn start_page() -> &'static str {
    r##"---
layout: govuk-default
title: Start page example
---

<div class="govuk-grid-row">
  <div class="govuk-grid-column-two-thirds">
    <h1 class="govuk-heading-xl">Service name goes here</h1>

    <p class="govuk-body">Use this service to:</p>

    <ul class="govuk-list govuk-list--bullet">
      <li>do something</li>
      <li>update something</li>
      <li>apply for something</li>
    </ul>

    <p class="govuk-body">Registering takes around 5 minutes.</p>

    <a href="question-page" role="button" draggable="false" class="govuk-button govuk-button--start" data-module="govuk-button">
      Start now
      <svg class="govuk-button__start-icon" xmlns="http://www.w3.org/2000/svg" width="17.5" height="19" viewBox="0 0 33 40" aria-hidden="true" focusable="false">
        <path fill="currentColor" d="M0 0h13l20 20-20 20H0l20-20z" />
      </svg>
    </a>

    <h2 class="govuk-heading-m">Before you start</h2>

    <p class="govuk-body">You'll need:</p>

    <ul class="govuk-list govuk-list--bullet">
      <li>item 1</li>
      <li>item 2</li>
      <li>item 3</li>
    </ul>

    <p class="govuk-body">
      Read the <a href="#" class="govuk-link">guidance notes</a> before completing this application.
    </p>
  </div>

  <div class="govuk-grid-column-one-third">
    <aside class="govuk-prototype-kit-common-templates-related-items" role="complementary">
      <h2 class="govuk-heading-m" id="subsection-title">
        Related content
      </h2>
      <nav role="navigation" aria-labelledby="subsection-title">
        <ul class="govuk-list govuk-!-font-size-16">
          <li>
            <a href="#" class="govuk-link">
              Related link
            </a>
          </li>
          <li>
            <a href="#" class="govuk-link">
              Related link
            </a>
          </li>
        </ul>
      </nav>
    </aside>
  </div>
</div>
"##
}

/// Sample question page with a radio fieldset.
pub fn question_page() -> &'static str {
    r##"---
layout: govuk-default
title: Question page example
show_back_link: true
---

<div class="govuk-grid-row">
  <div class="govuk-grid-column-two-thirds">
    <form action="components" method="get">
      <div class="govuk-form-group">
        <fieldset class="govuk-fieldset">
          <legend class="govuk-fieldset__legend govuk-fieldset__legend--l">
            <h1 class="govuk-fieldset__heading">
              Where do you live?
            </h1>
          </legend>

          <div class="govuk-radios" data-module="govuk-radios">
            <div class="govuk-radios__item">
              <input class="govuk-radios__input" id="where-do-you-live" name="where-do-you-live" type="radio" value="england">
              <label class="govuk-label govuk-radios__label" for="where-do-you-live">
                England
              </label>
            </div>
            <div class="govuk-radios__item">
              <input class="govuk-radios__input" id="where-do-you-live-2" name="where-do-you-live" type="radio" value="scotland">
              <label class="govuk-label govuk-radios__label" for="where-do-you-live-2">
                Scotland
              </label>
            </div>
            <div class="govuk-radios__item">
              <input class="govuk-radios__input" id="where-do-you-live-3" name="where-do-you-live" type="radio" value="wales">
              <label class="govuk-label govuk-radios__label" for="where-do-you-live-3">
                Wales
              </label>
            </div>
            <div class="govuk-radios__item">
              <input class="govuk-radios__input" id="where-do-you-live-4" name="where-do-you-live" type="radio" value="northern-ireland">
              <label class="govuk-label govuk-radios__label" for="where-do-you-live-4">
                Northern Ireland
              </label>
            </div>
            <div class="govuk-radios__divider">or</div>
            <div class="govuk-radios__item">
              <input class="govuk-radios__input" id="where-do-you-live-5" name="where-do-you-live" type="radio" value="abroad">
              <label class="govuk-label govuk-radios__label" for="where-do-you-live-5">
                I am a British citizen living abroad
              </label>
            </div>
          </div>
        </fieldset>
      </div>

      <button class="govuk-button" data-module="govuk-button">
        Continue
      </button>
    </form>
  </div>
</div>
"##
}

/// Sample component showcase page.
pub fn components_page() -> &'static str {
    r##"---
layout: govuk-default
title: Component examples
show_back_link: true
show_phase_banner: true
phase: beta
---

<div class="govuk-grid-row">
  <div class="govuk-grid-column-full">
    <h1 class="govuk-heading-xl">GOV.UK Frontend Components</h1>

    <p class="govuk-body-l">This page demonstrates various GOV.UK Frontend components.</p>
  </div>
</div>

<div class="govuk-grid-row">
  <div class="govuk-grid-column-two-thirds">
    <h2 class="govuk-heading-l">Typography</h2>

    <h1 class="govuk-heading-xl">govuk-heading-xl</h1>
    <h2 class="govuk-heading-l">govuk-heading-l</h2>
    <h3 class="govuk-heading-m">govuk-heading-m</h3>
    <h4 class="govuk-heading-s">govuk-heading-s</h4>

    <p class="govuk-body-l">govuk-body-l</p>
    <p class="govuk-body">govuk-body</p>
    <p class="govuk-body-s">govuk-body-s</p>

    <h2 class="govuk-heading-l">Buttons</h2>

    <button class="govuk-button" data-module="govuk-button">
      Default button
    </button>

    <button class="govuk-button govuk-button--secondary" data-module="govuk-button">
      Secondary button
    </button>

    <button class="govuk-button govuk-button--warning" data-module="govuk-button">
      Warning button
    </button>

    <button class="govuk-button" disabled="disabled" aria-disabled="true" data-module="govuk-button">
      Disabled button
    </button>

    <h2 class="govuk-heading-l">Text input</h2>

    <div class="govuk-form-group">
      <label class="govuk-label" for="input-example">
        National Insurance number
      </label>
      <div id="input-example-hint" class="govuk-hint">
        It's on your National Insurance card, benefit letter, payslip or P60. For example, 'QQ 12 34 56 C'.
      </div>
      <input class="govuk-input" id="input-example" name="test-name" type="text" aria-describedby="input-example-hint">
    </div>

    <h2 class="govuk-heading-l">Error messages</h2>

    <div class="govuk-form-group govuk-form-group--error">
      <label class="govuk-label" for="file-upload-1">
        Upload a file
      </label>
      <div id="file-upload-1-hint" class="govuk-hint">
        The file must be a PDF
      </div>
      <span id="file-upload-1-error" class="govuk-error-message">
        <span class="govuk-visually-hidden">Error:</span> The file must be a PDF
      </span>
      <input class="govuk-file-upload govuk-file-upload--error" id="file-upload-1" name="file-upload-1" type="file" aria-describedby="file-upload-1-hint file-upload-1-error">
    </div>

    <h2 class="govuk-heading-l">Warning text</h2>

    <div class="govuk-warning-text">
      <span class="govuk-warning-text__icon" aria-hidden="true">!</span>
      <strong class="govuk-warning-text__text">
        <span class="govuk-warning-text__assistive">Warning</span>
        You can be fined up to £5,000 if you don't register.
      </strong>
    </div>

    <h2 class="govuk-heading-l">Summary list</h2>

    <dl class="govuk-summary-list">
      <div class="govuk-summary-list__row">
        <dt class="govuk-summary-list__key">
          Name
        </dt>
        <dd class="govuk-summary-list__value">
          Sarah Philips
        </dd>
        <dd class="govuk-summary-list__actions">
          <a class="govuk-link" href="#">
            Change<span class="govuk-visually-hidden"> name</span>
          </a>
        </dd>
      </div>
      <div class="govuk-summary-list__row">
        <dt class="govuk-summary-list__key">
          Date of birth
        </dt>
        <dd class="govuk-summary-list__value">
          5 January 1978
        </dd>
        <dd class="govuk-summary-list__actions">
          <a class="govuk-link" href="#">
            Change<span class="govuk-visually-hidden"> date of birth</span>
          </a>
        </dd>
      </div>
      <div class="govuk-summary-list__row">
        <dt class="govuk-summary-list__key">
          Address
        </dt>
        <dd class="govuk-summary-list__value">
          72 Guild Street<br>London<br>SE23 6FH
        </dd>
        <dd class="govuk-summary-list__actions">
          <a class="govuk-link" href="#">
            Change<span class="govuk-visually-hidden"> address</span>
          </a>
        </dd>
      </div>
      <div class="govuk-summary-list__row">
        <dt class="govuk-summary-list__key">
          Contact details
        </dt>
        <dd class="govuk-summary-list__value">
          <p class="govuk-body">07700 900457</p>
          <p class="govuk-body">sarah.phillips@example.com</p>
        </dd>
        <dd class="govuk-summary-list__actions">
          <a class="govuk-link" href="#">
            Change<span class="govuk-visually-hidden"> contact details</span>
          </a>
        </dd>
      </div>
    </dl>

    <h2 class="govuk-heading-l">Notification banner</h2>

    <div class="govuk-notification-banner" role="region" aria-labelledby="govuk-notification-banner-title" data-module="govuk-notification-banner">
      <div class="govuk-notification-banner__header">
        <h2 class="govuk-notification-banner__title" id="govuk-notification-banner-title">
          Important
        </h2>
      </div>
      <div class="govuk-notification-banner__content">
        <p class="govuk-notification-banner__heading">
          You have 7 days left to send your application.
          <a class="govuk-notification-banner__link" href="#">View application</a>.
        </p>
      </div>
    </div>

    <div class="govuk-notification-banner govuk-notification-banner--success" role="alert" aria-labelledby="govuk-notification-banner-title" data-module="govuk-notification-banner">
      <div class="govuk-notification-banner__header">
        <h2 class="govuk-notification-banner__title" id="govuk-notification-banner-title">
          Success
        </h2>
      </div>
      <div class="govuk-notification-banner__content">
        <h3 class="govuk-notification-banner__heading">
          Application complete
        </h3>
        <p class="govuk-body">
          Your reference number is <br><strong>HDJ2123F</strong>
        </p>
      </div>
    </div>
  </div>
</div>
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use govkit_core::frontend::DEFAULT_VERSION;

    #[test]
    fn test_yaml_quote_escapes() {
        assert_eq!(yaml_quote("Demo"), "\"Demo\"");
        assert_eq!(yaml_quote("A: B"), "\"A: B\"");
        assert_eq!(yaml_quote(r#"Say "hi""#), r#""Say \"hi\"""#);
        assert_eq!(yaml_quote(r"back\slash"), r#""back\\slash""#);
    }

    #[test]
    fn test_relative_url_wraps_path() {
        assert_eq!(
            relative_url("/assets/css/custom.css"),
            "{{ '/assets/css/custom.css' | relative_url }}"
        );
    }

    #[test]
    fn test_config_contains_quoted_title() {
        let yml = config_yml("Demo Site");
        assert!(yml.contains("title: \"Demo Site\""));
        assert!(yml.contains("markdown: kramdown"));
        assert!(yml.contains("jekyll-feed"));
    }

    #[test]
    fn test_layout_cdn_snippet_is_exclusive() {
        let html = layout_html(AssetMode::Cdn, DEFAULT_VERSION);

        assert!(html.contains(
            "https://cdn.jsdelivr.net/npm/govuk-frontend@5.10.2/dist/govuk-frontend-5.10.2.min.css"
        ));
        assert!(html.contains(
            "https://cdn.jsdelivr.net/npm/govuk-frontend@5.10.2/dist/govuk-frontend-5.10.2.min.js"
        ));
        assert!(!html.contains("/assets/css/govuk-frontend"));
        assert!(!html.contains("custom.css"));
    }

    #[test]
    fn test_layout_self_hosted_snippet_is_exclusive() {
        let html = layout_html(AssetMode::SelfHosted, DEFAULT_VERSION);

        assert!(html.contains(
            "{{ '/assets/css/govuk-frontend-5.10.2.min.css' | relative_url }}"
        ));
        assert!(html.contains(
            "{{ '/assets/js/govuk-frontend-5.10.2.min.js' | relative_url }}"
        ));
        assert!(html.contains("{{ '/assets/css/custom.css' | relative_url }}"));
        assert!(!html.contains("cdn.jsdelivr.net"));
    }

    #[test]
    fn test_layout_carries_template_plumbing() {
        for mode in [AssetMode::Cdn, AssetMode::SelfHosted] {
            let html = layout_html(mode, DEFAULT_VERSION);
            assert!(html.contains("{{ content }}"));
            assert!(html.contains("{% if page.show_phase_banner %}"));
            assert!(html.contains("{% if page.show_back_link %}"));
            assert!(html.contains("window.GOVUKFrontend.initAll()"));
        }
    }

    #[test]
    fn test_pages_reference_the_layout() {
        for page in [index_page(), start_page(), question_page(), components_page()] {
            assert!(page.starts_with("---\nlayout: govuk-default\n"));
        }
    }

    #[test]
    fn test_index_links_sample_pages() {
        let page = index_page();
        assert!(page.contains("href=\"start-page\""));
        assert!(page.contains("href=\"question-page\""));
        assert!(page.contains("href=\"components\""));
    }

    #[test]
    fn test_readme_records_mode_and_version() {
        let text = readme("Demo", AssetMode::Cdn, "v5.10.2");
        assert!(text.starts_with("# Demo\n"));
        assert!(text.contains("GOV.UK Frontend version: v5.10.2"));
        assert!(text.contains("Asset mode: CDN"));

        let text = readme("Demo", AssetMode::SelfHosted, "5.10.2");
        assert!(text.contains("Asset mode: self-hosted"));
    }
}
