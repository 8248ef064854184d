//! The built-in mustache templates for the three page kinds. Every `{{..}}`
//! placeholder is HTML-escaped by ramhorns; only the pre-rendered article
//! body goes through a triple-brace placeholder. The embedded page scripts
//! (dark-mode toggle, back-to-top, client-side listings over `posts.js`)
//! are opaque template text.

/// Template for a single article page. Lives one directory level below the
/// site root, hence the `../` asset prefixes.
pub const ARTICLE: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}} — {{site_title}}</title>
    <link rel="icon" type="image/jpeg" href="../logo_color.jpg">
    <link rel="stylesheet" href="../style.css">
</head>
<body class="article-page">
    <div class="progress-bar" id="progress-bar"></div>
    <nav class="topnav">
        <a href="../" class="nav-left">← {{site_title}}</a>
        <div class="nav-links">
            <button class="dark-toggle" id="dark-toggle" aria-label="Dark mode">◐</button>
            <a href="../archive.html">Archive</a>
        </div>
    </nav>
    <article>
        <header class="article-header">
            <div class="article-meta-top">
                <span><a href="../{{author_slug}}/" style="color:inherit;text-decoration:none;">{{author}}</a></span>
                <span>·</span>
                <span class="pub-type {{type_class}}">{{type_label}}</span>
                <span>·</span>
                <span>{{readtime}}</span>
                <span>·</span>
                <span>{{wordcount}} words</span>
            </div>
            <h1 class="article-title">{{title}}</h1>
            {{#summary}}<p class="article-subtitle">{{text}}</p>{{/summary}}
            <div class="article-byline">
                <span>{{date}}</span>
            </div>
            {{#tag_block}}<div class="article-tags">{{#tags}}<span class="pub-tag">{{tag}}</span>{{/tags}}</div>{{/tag_block}}
        </header>
        {{#toc}}
        <nav class="toc">
            <div class="toc-label">Contents</div>
            <ol class="toc-list">
                {{#entries}}
                <li{{#nested}} style="padding-left:1rem;"{{/nested}}><a href="#{{slug}}">{{text}}</a></li>
                {{/entries}}
            </ol>
        </nav>
        {{/toc}}
        <div class="article-body">
            {{{body}}}
        </div>
    </article>
    {{#related}}
    <section class="related-posts">
        <div class="section-header">
            <span class="section-label">Also on {{site_title}}</span>
            <div class="section-rule"></div>
        </div>
        <div class="related-grid">
            {{#items}}
            <a href="../{{url}}" class="related-item">
                <div class="related-meta">
                    <span class="pub-author">{{author}}</span>
                    <span class="pub-type {{type_class}}">{{type_label}}</span>
                </div>
                <span class="related-title">{{title}}</span>
                <span class="pub-tldr">{{summary}}</span>
            </a>
            {{/items}}
        </div>
    </section>
    {{/related}}
    <footer class="footer">
        <div class="footer-top">
            <a href="../" class="footer-logo">{{site_title}}</a>
            <nav class="footer-nav">
                <a href="../archive.html">Archive</a>
            </nav>
        </div>
        <div class="footer-bottom">
            <span>© {{site_title}}</span>
        </div>
    </footer>
    <button class="back-to-top" id="back-to-top" aria-label="Back to top">↑</button>
    <script>
        // Reading progress bar
        window.addEventListener('scroll', function() {
            const article = document.querySelector('.article-body');
            if (!article) return;
            const bar = document.getElementById('progress-bar');
            const start = article.offsetTop;
            const end = article.offsetTop + article.offsetHeight - window.innerHeight;
            const progress = Math.min(100, Math.max(0, ((window.scrollY - start) / (end - start)) * 100));
            bar.style.width = progress + '%';
        });
    </script>
    <script>
        // Dark mode (applied before paint to avoid a flash)
        (function() {
            const saved = localStorage.getItem('theme');
            if (saved === 'dark' || (!saved && window.matchMedia('(prefers-color-scheme: dark)').matches)) {
                document.documentElement.setAttribute('data-theme', 'dark');
            }
        })();
        document.addEventListener('DOMContentLoaded', function() {
            const btn = document.getElementById('dark-toggle');
            if (btn) {
                btn.addEventListener('click', function() {
                    const isDark = document.documentElement.getAttribute('data-theme') === 'dark';
                    document.documentElement.setAttribute('data-theme', isDark ? 'light' : 'dark');
                    localStorage.setItem('theme', isDark ? 'light' : 'dark');
                });
            }
            const backBtn = document.getElementById('back-to-top');
            if (backBtn) {
                window.addEventListener('scroll', function() {
                    backBtn.classList.toggle('visible', window.scrollY > 600);
                });
                backBtn.addEventListener('click', function() {
                    window.scrollTo({ top: 0, behavior: 'smooth' });
                });
            }
        });
    </script>
</body>
</html>
"##;

/// Template for an author's index page. The post list itself is rendered
/// client-side from `posts.js`, filtered to the author's slug.
pub const AUTHOR: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{name}} — {{site_title}}</title>
    <link rel="icon" type="image/jpeg" href="../logo_color.jpg">
    <link rel="stylesheet" href="../style.css">
</head>
<body>
    <nav class="topnav">
        <a href="../" class="nav-left">← {{site_title}}</a>
        <div class="nav-links">
            <button class="dark-toggle" id="dark-toggle" aria-label="Dark mode">◐</button>
            <a href="../archive.html">Archive</a>
        </div>
    </nav>
    <header class="author-hero">
        <div class="author-hero-initial">{{initial}}</div>
        <div class="author-hero-right">
            <h1 class="author-hero-name">{{name}}</h1>
            <p class="author-hero-bio">{{bio}}</p>
            {{#topics}}
            <div class="author-hero-topics">{{#tags}}<span class="pub-tag">{{tag}}</span>{{/tags}}</div>
            {{/topics}}
            {{#links}}
            <div class="author-hero-links">{{#items}}<a href="{{url}}" target="_blank">{{label}} ↗</a>{{/items}}</div>
            {{/links}}
            <div class="author-hero-meta">
                <span id="post-count">0 posts</span>
            </div>
        </div>
    </header>

    <section class="author-posts-section">
        <div class="section-header">
            <span class="section-label">All posts</span>
            <div class="section-rule"></div>
        </div>
        <div id="author-pub-list"></div>
    </section>

    <footer class="footer">
        <div class="footer-top">
            <a href="../" class="footer-logo">{{site_title}}</a>
            <nav class="footer-nav">
                <a href="../archive.html">Archive</a>
            </nav>
        </div>
        <div class="footer-bottom">
            <span>© {{site_title}}</span>
        </div>
    </footer>
    <button class="back-to-top" id="back-to-top" aria-label="Back to top">↑</button>
    <script src="../posts.js"></script>
    <script>
        const CURRENT_AUTHOR_SLUG = "{{slug}}";
        function renderAuthorPage() {
            const pubList = document.getElementById('author-pub-list');
            const countLabel = document.getElementById('post-count');
            const myPosts = POSTS.filter(p => p.authorSlug === CURRENT_AUTHOR_SLUG);
            if (countLabel) {
                countLabel.textContent = myPosts.length + ' ' + (myPosts.length === 1 ? 'post' : 'posts');
            }
            if (myPosts.length === 0) {
                pubList.innerHTML = '<div class="pub-empty"><span class="pub-empty-glyph">∅</span><p>Nothing here yet.</p></div>';
                return;
            }
            const listContainer = document.createElement('div');
            listContainer.className = 'pub-list';
            myPosts.forEach(post => {
                const item = document.createElement('a');
                item.href = post.url.split('/').pop();
                item.className = 'pub-item';
                item.innerHTML = '<div class="pub-left"><span class="pub-author"></span><span class="pub-date"></span></div>'
                    + '<div class="pub-center"><span class="pub-title"></span><span class="pub-tldr"></span><div class="pub-tags"></div></div>'
                    + '<div class="pub-right"><span class="pub-type"></span><span class="pub-readtime"></span></div>';
                item.querySelector('.pub-author').textContent = post.author;
                item.querySelector('.pub-date').textContent = post.date;
                item.querySelector('.pub-title').textContent = post.title;
                item.querySelector('.pub-tldr').textContent = post.summary;
                item.querySelector('.pub-type').textContent = post.type.charAt(0).toUpperCase() + post.type.slice(1);
                item.querySelector('.pub-type').classList.add(post.type);
                item.querySelector('.pub-readtime').textContent = post.readtime;
                const tagBox = item.querySelector('.pub-tags');
                post.tags.forEach(t => {
                    const span = document.createElement('span');
                    span.className = 'pub-tag';
                    span.textContent = t;
                    tagBox.appendChild(span);
                });
                listContainer.appendChild(item);
            });
            pubList.appendChild(listContainer);
        }
        document.addEventListener('DOMContentLoaded', function() {
            if (typeof POSTS !== 'undefined') renderAuthorPage();
        });
    </script>
    <script>
        (function() {
            const saved = localStorage.getItem('theme');
            if (saved === 'dark' || (!saved && window.matchMedia('(prefers-color-scheme: dark)').matches)) {
                document.documentElement.setAttribute('data-theme', 'dark');
            }
        })();
        document.addEventListener('DOMContentLoaded', function() {
            const btn = document.getElementById('dark-toggle');
            if (btn) {
                btn.addEventListener('click', function() {
                    const isDark = document.documentElement.getAttribute('data-theme') === 'dark';
                    document.documentElement.setAttribute('data-theme', isDark ? 'light' : 'dark');
                    localStorage.setItem('theme', isDark ? 'light' : 'dark');
                });
            }
            const backBtn = document.getElementById('back-to-top');
            if (backBtn) {
                window.addEventListener('scroll', function() {
                    backBtn.classList.toggle('visible', window.scrollY > 600);
                });
                backBtn.addEventListener('click', function() {
                    window.scrollTo({ top: 0, behavior: 'smooth' });
                });
            }
        });
    </script>
</body>
</html>
"##;

/// Template for the global archive page at the site root. The chronological
/// list is rendered client-side from `posts.js`, grouped by year-month.
pub const ARCHIVE: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Archive — {{site_title}}</title>
    <link rel="icon" type="image/jpeg" href="logo_color.jpg">
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <nav class="topnav">
        <a href="./" class="nav-left">← {{site_title}}</a>
        <div class="nav-links">
            <button class="dark-toggle" id="dark-toggle" aria-label="Dark mode">◐</button>
        </div>
    </nav>

    <header class="hero" style="padding-bottom:0;">
        <h1 class="hero-title" style="font-size:clamp(2.5rem,7vw,5rem);">Archive</h1>
        <div class="hero-meta" style="padding-bottom:3rem;">All posts in chronological order</div>
    </header>

    <main class="content" style="padding-bottom:5rem;">
        <div id="archive-list"></div>
    </main>

    <footer class="footer">
        <div class="footer-top">
            <a href="./" class="footer-logo">{{site_title}}</a>
        </div>
        <div class="footer-bottom">
            <span>© {{site_title}}</span>
        </div>
    </footer>
    <button class="back-to-top" id="back-to-top" aria-label="Back to top">↑</button>
    <script src="posts.js"></script>
    <script>
        document.addEventListener('DOMContentLoaded', function() {
            if (typeof POSTS === 'undefined') return;
            const container = document.getElementById('archive-list');

            // Group by year-month
            const groups = {};
            POSTS.forEach(post => {
                const d = new Date(post.date);
                const key = isNaN(d) ? 'undated' : d.getFullYear() + '-' + String(d.getMonth()).padStart(2, '0');
                const label = isNaN(d) ? 'Undated' : d.toLocaleDateString('en-US', { month: 'long', year: 'numeric' });
                if (!groups[key]) groups[key] = { label: label, posts: [] };
                groups[key].posts.push(post);
            });

            const sortedKeys = Object.keys(groups).sort((a, b) => b.localeCompare(a));
            sortedKeys.forEach(key => {
                const g = groups[key];
                const section = document.createElement('div');
                const header = document.createElement('div');
                header.className = 'section-header';
                const headerLabel = document.createElement('span');
                headerLabel.className = 'section-label';
                headerLabel.textContent = g.label;
                const rule = document.createElement('div');
                rule.className = 'section-rule';
                header.appendChild(headerLabel);
                header.appendChild(rule);
                section.appendChild(header);
                const list = document.createElement('div');
                list.className = 'pub-list';
                g.posts.forEach(post => {
                    const item = document.createElement('a');
                    item.href = post.url;
                    item.className = 'pub-item';
                    item.innerHTML = '<div class="pub-left"><span class="pub-author"></span><span class="pub-date"></span></div>'
                        + '<div class="pub-center"><span class="pub-title"></span><span class="pub-tldr"></span><div class="pub-tags"></div></div>'
                        + '<div class="pub-right"><span class="pub-type"></span><span class="pub-readtime"></span></div>';
                    item.querySelector('.pub-author').textContent = post.author;
                    item.querySelector('.pub-date').textContent = post.date;
                    item.querySelector('.pub-title').textContent = post.title;
                    item.querySelector('.pub-tldr').textContent = post.summary;
                    item.querySelector('.pub-type').textContent = post.type.charAt(0).toUpperCase() + post.type.slice(1);
                    item.querySelector('.pub-type').classList.add(post.type);
                    item.querySelector('.pub-readtime').textContent = post.readtime;
                    const tagBox = item.querySelector('.pub-tags');
                    post.tags.forEach(t => {
                        const span = document.createElement('span');
                        span.className = 'pub-tag';
                        span.textContent = t;
                        tagBox.appendChild(span);
                    });
                    list.appendChild(item);
                });
                section.appendChild(list);
                container.appendChild(section);
            });
        });
    </script>
    <script>
        (function() {
            const saved = localStorage.getItem('theme');
            if (saved === 'dark' || (!saved && window.matchMedia('(prefers-color-scheme: dark)').matches)) {
                document.documentElement.setAttribute('data-theme', 'dark');
            }
        })();
        document.addEventListener('DOMContentLoaded', function() {
            const btn = document.getElementById('dark-toggle');
            if (btn) {
                btn.addEventListener('click', function() {
                    const isDark = document.documentElement.getAttribute('data-theme') === 'dark';
                    document.documentElement.setAttribute('data-theme', isDark ? 'light' : 'dark');
                    localStorage.setItem('theme', isDark ? 'light' : 'dark');
                });
            }
            const backBtn = document.getElementById('back-to-top');
            if (backBtn) {
                window.addEventListener('scroll', function() {
                    backBtn.classList.toggle('visible', window.scrollY > 600);
                });
                backBtn.addEventListener('click', function() {
                    window.scrollTo({ top: 0, behavior: 'smooth' });
                });
            }
        });
    </script>
</body>
</html>
"##;
