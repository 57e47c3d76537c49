//! Server-rendered HTML pages
//!
//! Every page shares one layout with the navigation bar and a breadcrumb.
//! All text coming from visitors or upstream APIs goes through [`escape`].

use crate::models::{
    AirQualityReport, Coordinates, DaySummary, EventListing, NewsArticle, Video, WeatherReport,
};

const NAV: [(&str, &str); 10] = [
    ("/", "Inicio"),
    ("/sistema-ambiental", "Sistema Ambiental"),
    ("/futuro", "Futuro del Planeta"),
    ("/tres-r", "Las 3 R"),
    ("/clima", "Clima"),
    ("/calidad-aire", "Calidad del Aire"),
    ("/noticias", "Noticias"),
    ("/videos", "Videos"),
    ("/eventos", "Eventos"),
    ("/calculadora", "Calculadora"),
];

/// Escape text for safe inclusion in HTML content and attribute values
#[must_use]
pub fn escape(text: &str) -> String {
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

fn layout(title: &str, breadcrumb: &[&str], body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{href}">{label}</a></li>"#))
        .collect();

    let crumbs = breadcrumb
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            if i == 0 && breadcrumb.len() > 1 {
                format!(r#"<li><a href="/">{}</a></li>"#, escape(crumb))
            } else {
                format!("<li>{}</li>", escape(crumb))
            }
        })
        .collect::<String>();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | EcoPortal</title>
</head>
<body>
<nav><ul class="nav">{nav}</ul></nav>
<ol class="breadcrumb">{crumbs}</ol>
<main>
{body}
</main>
<footer><p>EcoPortal: información ambiental para todos.</p></footer>
</body>
</html>"#,
        title = escape(title),
    )
}

fn error_alert(message: &str) -> String {
    format!(r#"<div class="alert alert-danger">{}</div>"#, escape(message))
}

fn city_form(action: &str, city: Option<&str>) -> String {
    format!(
        r#"<form method="post" action="{action}">
<input type="text" name="city" placeholder="Ciudad" value="{}" required>
<button type="submit">Buscar</button>
</form>"#,
        escape(city.unwrap_or_default())
    )
}

fn map_embed(maps_key: Option<&str>, coordinates: Coordinates) -> String {
    match maps_key {
        Some(key) => format!(
            r#"<iframe class="map" width="600" height="400" loading="lazy" src="https://www.google.com/maps/embed/v1/view?key={}&amp;center={},{}&amp;zoom=10"></iframe>"#,
            escape(&urlencoding::encode(key)),
            coordinates.latitude,
            coordinates.longitude
        ),
        None => String::new(),
    }
}

pub fn index() -> String {
    layout(
        "Inicio",
        &["Inicio"],
        r#"<h1>Bienvenido a EcoPortal</h1>
<p>Un espacio para conocer el estado del medio ambiente y aprender a cuidarlo.</p>
<ul>
<li><a href="/clima">Consulta el clima</a> y el pronóstico de los próximos días.</li>
<li><a href="/calidad-aire">Revisa la calidad del aire</a> de tu ciudad.</li>
<li><a href="/eventos">Explora los eventos naturales</a> que ocurren en el planeta.</li>
<li><a href="/calculadora">Calcula tu huella de carbono</a>.</li>
</ul>"#,
    )
}

pub fn sistema() -> String {
    layout(
        "Sistema de Gestión Ambiental",
        &["Inicio", "Sistema de Gestión Ambiental"],
        r"<h1>Sistema de Gestión Ambiental</h1>
<p>Un sistema de gestión ambiental es el conjunto de procesos que permite a una organización
identificar, controlar y reducir sus impactos sobre el medio ambiente.</p>
<h2>Ciclo de mejora continua</h2>
<ol>
<li>Planificar: identificar aspectos ambientales y fijar objetivos.</li>
<li>Hacer: implementar controles y capacitar al personal.</li>
<li>Verificar: medir, monitorear y auditar resultados.</li>
<li>Actuar: corregir desviaciones y mejorar.</li>
</ol>",
    )
}

pub fn futuro() -> String {
    layout(
        "Futuro del Planeta",
        &["Inicio", "Futuro del Planeta"],
        r"<h1>Futuro del Planeta</h1>
<p>El aumento de la temperatura global, la pérdida de biodiversidad y la contaminación
de océanos y suelos son los grandes desafíos de las próximas décadas.</p>
<p>Las energías renovables, la economía circular y la protección de los ecosistemas
marcan el camino hacia un futuro sostenible.</p>",
    )
}

pub fn tres_r() -> String {
    layout(
        "Las 3 R",
        &["Inicio", "Las 3 R"],
        r"<h1>Las 3 R</h1>
<dl>
<dt>Reducir</dt><dd>Consumir menos y evitar productos de un solo uso.</dd>
<dt>Reutilizar</dt><dd>Dar una segunda vida a los objetos antes de desecharlos.</dd>
<dt>Reciclar</dt><dd>Separar los residuos para transformarlos en nuevos materiales.</dd>
</dl>",
    )
}

/// Weather page; `report` and `error` are both absent for the empty form
pub fn clima(
    city: Option<&str>,
    report: Option<&WeatherReport>,
    error: Option<&str>,
    maps_key: Option<&str>,
) -> String {
    let mut body = String::from("<h1>Clima</h1>\n");
    body.push_str(&city_form("/clima", city));

    if let Some(message) = error {
        body.push_str(&error_alert(message));
    }

    if let Some(report) = report {
        let current = &report.current;
        body.push_str(&format!(
            r#"
<section class="current">
<h2>{city}</h2>
<img src="https://openweathermap.org/img/wn/{icon}@2x.png" alt="{description}">
<p class="temp">{temp}</p>
<p>{description}</p>
<ul>
<li>Sensación térmica: {feels_like:.1}°C</li>
<li>Humedad: {humidity}%</li>
<li>Presión: {pressure} hPa</li>
<li>Viento: {wind:.1} m/s</li>
<li>Visibilidad: {visibility}</li>
</ul>
</section>"#,
            city = escape(&current.city),
            icon = escape(&current.icon),
            description = escape(&current.description),
            temp = current.format_temperature(),
            feels_like = current.feels_like,
            humidity = current.humidity,
            pressure = current.pressure,
            wind = current.wind_speed,
            visibility = current.format_visibility(),
        ));
        body.push_str(&map_embed(maps_key, current.coordinates));
        body.push_str(&forecast_section(&report.forecast, report.forecast_error.as_deref()));
    }

    layout("Clima", &["Inicio", "Clima"], &body)
}

fn forecast_section(days: &[DaySummary], error: Option<&str>) -> String {
    let mut section = String::from("\n<section class=\"forecast\">\n<h2>Pronóstico de 5 días</h2>\n");
    if let Some(message) = error {
        section.push_str(&error_alert(message));
    }
    for day in days {
        section.push_str(&format!(
            r#"<div class="day"><h3>{name} {date}</h3><img src="https://openweathermap.org/img/wn/{icon}.png" alt="{description}"><p>{description}</p><p>{range}</p></div>
"#,
            name = escape(&day.day_name),
            date = escape(&day.date_short),
            icon = escape(&day.icon),
            description = escape(&day.description),
            range = day.format_range(),
        ));
    }
    section.push_str("</section>");
    section
}

/// Air quality page; `report` and `error` are both absent for the empty form
pub fn calidad_aire(
    city: Option<&str>,
    report: Option<&AirQualityReport>,
    error: Option<&str>,
    maps_key: Option<&str>,
) -> String {
    let mut body = String::from("<h1>Calidad del Aire</h1>\n");
    body.push_str(&city_form("/calidad-aire", city));

    if let Some(message) = error {
        body.push_str(&error_alert(message));
    }

    if let Some(report) = report {
        let p = &report.pollutants;
        body.push_str(&format!(
            r#"
<section class="aqi">
<h2>{city}</h2>
<div class="alert alert-{color}"><strong>Índice {aqi}: {level}</strong><p>{description}</p></div>
<table>
<tr><th>Contaminante</th><th>μg/m³</th></tr>
<tr><td>CO</td><td>{co:.2}</td></tr>
<tr><td>NO</td><td>{no:.2}</td></tr>
<tr><td>NO₂</td><td>{no2:.2}</td></tr>
<tr><td>O₃</td><td>{o3:.2}</td></tr>
<tr><td>SO₂</td><td>{so2:.2}</td></tr>
<tr><td>PM2.5</td><td>{pm2_5:.2}</td></tr>
<tr><td>PM10</td><td>{pm10:.2}</td></tr>
<tr><td>NH₃</td><td>{nh3:.2}</td></tr>
</table>
</section>"#,
            city = escape(&report.city),
            color = report.tier.color,
            aqi = report.aqi,
            level = report.tier.level,
            description = report.tier.description,
            co = p.co,
            no = p.no,
            no2 = p.no2,
            o3 = p.o3,
            so2 = p.so2,
            pm2_5 = p.pm2_5,
            pm10 = p.pm10,
            nh3 = p.nh3,
        ));
        body.push_str(&map_embed(maps_key, report.coordinates));
    }

    layout("Calidad del Aire", &["Inicio", "Calidad del Aire"], &body)
}

pub fn videos(videos: &[Video], error: Option<&str>) -> String {
    let mut body = String::from("<h1>Videos sobre medio ambiente</h1>\n");
    if let Some(message) = error {
        body.push_str(&error_alert(message));
    }
    for video in videos {
        body.push_str(&format!(
            r#"<article class="video"><a href="{url}"><img src="{thumbnail}" alt="{title}"></a><h3>{title}</h3><p>{description}</p></article>
"#,
            url = escape(&video.watch_url()),
            thumbnail = escape(&video.thumbnail),
            title = escape(&video.title),
            description = escape(&video.description),
        ));
    }
    layout("Videos", &["Inicio", "Videos"], &body)
}

pub fn noticias(articles: &[NewsArticle], error: Option<&str>, categoria_actual: &str) -> String {
    let mut body = format!(
        r#"<h1>Noticias</h1>
<form method="get" action="/noticias">
<input type="text" name="categoria" value="{}">
<button type="submit">Buscar</button>
</form>
"#,
        escape(categoria_actual)
    );
    if let Some(message) = error {
        body.push_str(&error_alert(message));
    }
    if articles.is_empty() && error.is_none() {
        body.push_str("<p>No hay noticias disponibles.</p>");
    }
    for article in articles {
        body.push_str(&format!(
            r#"<article class="news"><img src="{image}" alt="{title}"><h3><a href="{link}">{title}</a></h3><p>{description}</p><small>{published}</small></article>
"#,
            image = escape(&article.image_url),
            link = escape(&article.link),
            title = escape(&article.title),
            description = escape(&article.description),
            published = escape(&article.published),
        ));
    }
    layout("Noticias", &["Inicio", "Noticias"], &body)
}

/// Calculator page; `resultado` is absent until the form is submitted
pub fn calculadora(resultado: Option<Result<f64, String>>) -> String {
    let mut body = String::from(
        r#"<h1>Calculadora de Huella de Carbono</h1>
<form method="post" action="/calculadora">
<label>Electricidad (kWh/mes) <input type="text" name="electrico" value="0"></label>
<label>Transporte (km/mes) <input type="text" name="transporte" value="0"></label>
<label>Carne (kg/mes) <input type="text" name="carne" value="0"></label>
<label>Vuelos (horas/mes) <input type="text" name="vuelo" value="0"></label>
<button type="submit">Calcular</button>
</form>
"#,
    );
    match resultado {
        Some(Ok(total)) => {
            body.push_str(&format!(
                r#"<div class="alert alert-info">Tu huella de carbono estimada es de <strong>{total:.2} kg de CO₂</strong>.</div>"#
            ));
        }
        Some(Err(message)) => body.push_str(&error_alert(&message)),
        None => {}
    }
    layout("Calculadora", &["Inicio", "Calculadora"], &body)
}

pub fn eventos(listing: &EventListing, categories: &[String], selected: Option<&str>) -> String {
    let mut options = String::from(r#"<option value="">Todas</option>"#);
    for category in categories {
        let is_selected = if selected == Some(category.as_str()) { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{value}"{is_selected}>{value}</option>"#,
            value = escape(category)
        ));
    }

    let mut body = format!(
        r#"<h1>Eventos Ambientales</h1>
<form method="get" action="/eventos">
<select name="category">{options}</select>
<button type="submit">Filtrar</button>
</form>
"#
    );

    match listing {
        EventListing::Events(events) => {
            for event in events {
                let position = event.coordinates.map_or_else(
                    || "Ubicación no disponible".to_string(),
                    |c| format!("{:.3}, {:.3}", c.latitude, c.longitude),
                );
                body.push_str(&format!(
                    r#"<article class="event" id="{id}"><h3>{title}</h3><p><span class="badge">{category}</span> {date}</p><p>{description}</p><small>{position}</small></article>
"#,
                    id = escape(&event.id),
                    title = escape(&event.title),
                    category = escape(&event.category),
                    date = escape(&event.date),
                    description = escape(&event.description),
                ));
            }
        }
        EventListing::NoResults(message) => {
            body.push_str(&format!(r#"<div class="alert alert-info">{}</div>"#, escape(message)));
        }
        EventListing::Error(message) => body.push_str(&error_alert(message)),
    }

    layout("Eventos Ambientales", &["Inicio", "Eventos Ambientales"], &body)
}
