/// Words stripped from pasted roster lines.
///
/// Chat exports usually open with a header such as "Fut jueves 20 horas" and
/// players annotate their own line ("regreso de lesion", "waiting"). A line
/// that *starts* with any of these words is dropped entirely; inside a name
/// every whole-word occurrence is removed.
pub const IGNORE_WORDS: &[&str] = &[
    "fut",
    "jueves",
    "viernes",
    "sabado",
    "domingo",
    "lunes",
    "martes",
    "miercoles",
    "horas",
    "hora",
    "waiting",
    "wait",
    "regreso",
    "lesion",
    "de",
    "del",
    "la",
    "el",
    "partido",
    "cancha",
    "municipal",
];
