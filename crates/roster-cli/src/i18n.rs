//! Two-language UI text
//!
//! Every user-facing label lives in a `Strings` table with an English and a
//! French edition; the active one is picked from `Config.language`. Lookup
//! is a plain field access, no runtime framework.

use roster_core::{Column, Field, Language};

/// UI string table for one language
pub struct Strings {
    pub app_title: &'static str,
    pub list_title: &'static str,
    pub create_title: &'static str,
    pub search_placeholder: &'static str,
    pub no_employees: &'static str,
    pub no_employees_filtered: &'static str,
    pub rows_label: &'static str,
    pub page_label: &'static str,
    pub of_label: &'static str,
    pub showing_label: &'static str,
    pub results_label: &'static str,
    pub employee_created: &'static str,
    pub personal_information: &'static str,
    pub address: &'static str,
    pub department_section: &'static str,
    pub save_employee: &'static str,
    pub cancel: &'static str,
    pub help_title: &'static str,
    pub list_hints: &'static str,
    pub form_hints: &'static str,
    pub press_any_key: &'static str,

    first_name: &'static str,
    last_name: &'static str,
    date_of_birth: &'static str,
    start_date: &'static str,
    street: &'static str,
    city: &'static str,
    state: &'static str,
    zip_code: &'static str,
    department: &'static str,
}

impl Strings {
    /// The string table for the given language
    pub fn for_language(language: Language) -> &'static Strings {
        match language {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }

    /// Column header label
    pub fn column(&self, column: Column) -> &'static str {
        match column {
            Column::FirstName => self.first_name,
            Column::LastName => self.last_name,
            Column::StartDate => self.start_date,
            Column::Department => self.department,
            Column::DateOfBirth => self.date_of_birth,
            Column::Street => self.street,
            Column::City => self.city,
            Column::State => self.state,
            Column::ZipCode => self.zip_code,
        }
    }

    /// Form field label
    pub fn field(&self, field: Field) -> &'static str {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::DateOfBirth => self.date_of_birth,
            Field::StartDate => self.start_date,
            Field::Street => self.street,
            Field::City => self.city,
            Field::State => self.state,
            Field::ZipCode => self.zip_code,
            Field::Department => self.department,
        }
    }
}

static EN: Strings = Strings {
    app_title: "Roster",
    list_title: "Current Employees",
    create_title: "Create New Employee",
    search_placeholder: "Search...",
    no_employees: "No employees found.",
    no_employees_filtered: "No employees found matching filter.",
    rows_label: "Rows",
    page_label: "Page",
    of_label: "of",
    showing_label: "Showing",
    results_label: "results",
    employee_created: "Employee successfully created!",
    personal_information: "Personal Information",
    address: "Address",
    department_section: "Department",
    save_employee: "Save Employee",
    cancel: "Cancel",
    help_title: "Keyboard Shortcuts",
    list_hints: "a:add  /:search  s:sort  n/p:page  z:rows  ?:help  q:quit",
    form_hints: "Tab/↑↓:field  ←→:choose  Enter:save  Esc:cancel",
    press_any_key: "Press any key to close",

    first_name: "First Name",
    last_name: "Last Name",
    date_of_birth: "Date of Birth",
    start_date: "Start Date",
    street: "Street",
    city: "City",
    state: "State",
    zip_code: "Zip Code",
    department: "Department",
};

static FR: Strings = Strings {
    app_title: "Roster",
    list_title: "Employés actuels",
    create_title: "Créer un nouvel employé",
    search_placeholder: "Rechercher...",
    no_employees: "Aucun employé trouvé.",
    no_employees_filtered: "Aucun employé ne correspond au filtre.",
    rows_label: "Lignes",
    page_label: "Page",
    of_label: "sur",
    showing_label: "Affichage de",
    results_label: "résultats",
    employee_created: "Employé créé avec succès !",
    personal_information: "Informations personnelles",
    address: "Adresse",
    department_section: "Service",
    save_employee: "Enregistrer l'employé",
    cancel: "Annuler",
    help_title: "Raccourcis clavier",
    list_hints: "a:ajouter  /:rechercher  s:trier  n/p:page  z:lignes  ?:aide  q:quitter",
    form_hints: "Tab/↑↓:champ  ←→:choisir  Entrée:enregistrer  Échap:annuler",
    press_any_key: "Appuyez sur une touche pour fermer",

    first_name: "Prénom",
    last_name: "Nom",
    date_of_birth: "Date de naissance",
    start_date: "Date de début",
    street: "Rue",
    city: "Ville",
    state: "État",
    zip_code: "Code postal",
    department: "Service",
};
