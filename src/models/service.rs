/// Категория услуг салона.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Women,
    Men,
}

/// Фиксированный каталог услуг.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    WomenHaircut,
    WomenColoring,
    MenHaircut,
    MenShave,
}

impl ServiceCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceCategory::Women => "women",
            ServiceCategory::Men => "men",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "women" => Some(ServiceCategory::Women),
            "men" => Some(ServiceCategory::Men),
            _ => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            ServiceCategory::Women => "👩 Для Женщин",
            ServiceCategory::Men => "👨 Для Мужчин",
        }
    }

    pub fn services(&self) -> [Service; 2] {
        match self {
            ServiceCategory::Women => [Service::WomenHaircut, Service::WomenColoring],
            ServiceCategory::Men => [Service::MenHaircut, Service::MenShave],
        }
    }
}

impl Service {
    pub fn code(&self) -> &'static str {
        match self {
            Service::WomenHaircut => "w_haircut",
            Service::WomenColoring => "w_coloring",
            Service::MenHaircut => "m_haircut",
            Service::MenShave => "m_shave",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "w_haircut" => Some(Service::WomenHaircut),
            "w_coloring" => Some(Service::WomenColoring),
            "m_haircut" => Some(Service::MenHaircut),
            "m_shave" => Some(Service::MenShave),
            _ => None,
        }
    }

    /// Полное название услуги для заявки администратору.
    pub fn label(&self) -> &'static str {
        match self {
            Service::WomenHaircut => "Женская Стрижка",
            Service::WomenColoring => "Женское Окрашивание",
            Service::MenHaircut => "Мужская Стрижка",
            Service::MenShave => "Мужские Барберские Услуги и Борода",
        }
    }

    /// Короткая подпись для кнопки выбора.
    pub fn button_label(&self) -> &'static str {
        match self {
            Service::WomenHaircut => "💇 Стрижка",
            Service::WomenColoring => "🎨 Окрашивание",
            Service::MenHaircut => "💈 Стрижка",
            Service::MenShave => "🪒 Барберские Услуги и Борода",
        }
    }

    pub fn category(&self) -> ServiceCategory {
        match self {
            Service::WomenHaircut | Service::WomenColoring => ServiceCategory::Women,
            Service::MenHaircut | Service::MenShave => ServiceCategory::Men,
        }
    }
}
