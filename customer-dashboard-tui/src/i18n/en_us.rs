//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, ConfirmDeleteTexts, CustomerColumns, CustomersTexts, DetailTexts,
    FeedbackModalTexts, FeedbackTexts, FieldLabels, FilterAttributeTexts, HelpActionTexts,
    HelpTexts, HintTexts, HomeTexts, KeyNames, ModalTexts, NavTexts, NewCustomerTexts,
    SettingsTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Customer Dashboard",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        cancel: "Cancel",
        save: "Save",
        confirm: "Confirm",
        close: "Close",
        loading: "Loading...",
        no_data: "No data",
        error: "Error",
        yes: "Yes",
        no: "No",
        page: "Page",
        total: "Total",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            slash: "/",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            select: "Select",
            open: "Open",
            switch_panel: "Switch panel",
            switch_option: "Switch",
            change_page: "Page",
            search: "Search",
            apply: "Apply",
            next_field: "Next field",
            toggle: "Toggle",
            back: "Back",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Home",
        customers: "Customers",
        settings: "Settings",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "Welcome to Customer Dashboard",
        welcome_desc: "List, filter, create, edit and delete customer records",
        connection: "Connection",
        api_endpoint: "API endpoint",
        page_size: "Rows per page",
        get_started: "Open Customers from the menu to get started",
    },

    customers: CustomersTexts {
        title: "Customers",
        filter_by: "Filter by",
        search_placeholder: "Press / to search",
        no_customers: "No customers found",
        add_customer_hint: "Press Alt+a to add a customer",
        date_format: "%m/%d/%Y",
        columns: CustomerColumns {
            id: "ID",
            name: "Name",
            email: "Email",
            phone: "Phone",
            address: "Address",
            updated_at: "Updated",
        },
        attributes: FilterAttributeTexts {
            name: "Name",
            cpf: "CPF",
            business_name: "Business name",
            cnpj: "CNPJ",
            identity_document: "Identity document",
        },
    },

    detail: DetailTexts {
        title: "Customer Details",
        loading: "Loading customer...",
        unavailable: "Customer could not be loaded (Alt+r to retry)",
        personal_info: "Personal information",
        address: "Address",
        correspondence_address: "Correspondence address",
        phone_contacts: "Phone contacts",
        email_contacts: "Email contacts",
        no_contacts: "None",
        editing: "Editing",
        saving: "Saving...",
        deleting: "Deleting...",
        last_updated: "Last updated",
    },

    fields: FieldLabels {
        customer_type: "Customer type",
        individual: "Individual (PF)",
        business: "Business (PJ)",
        name: "Name",
        cpf: "CPF",
        birth_date: "Birth date",
        mother_name: "Mother's name",
        business_name: "Business name",
        cnpj: "CNPJ",
        identity_document: "Identity document",
        issuing_agency: "Issuing agency",
        zip_code: "ZIP code",
        street: "Street",
        number: "Number",
        neighborhood: "Neighborhood",
        complement: "Complement",
        city: "City",
        state: "State",
        country: "Country",
        address_type: "Address type",
        has_multiple_units: "Multiple units",
        use_correspondence_address: "Use correspondence address",
        phone: "Phone",
        email: "Email",
        contact_name: "Contact name",
        is_whatsapp: "WhatsApp",
        add_phone: "+ Add phone",
        add_email: "+ Add email",
    },

    settings: SettingsTexts {
        title: "Settings",
        language: "Language",
        page_size: "Rows per page",
        api_endpoint: "API endpoint",
        saved_hint: "Changes are saved to the configuration file",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        new_customer: NewCustomerTexts {
            title: "New Customer",
            submitting: "Creating customer...",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            message: "Are you sure you want to delete this customer?",
            confirm_button: "Delete",
            cancel_button: "Cancel",
        },
        feedback: FeedbackModalTexts {
            success_title: "Success",
            error_title: "Error",
            close_hint: "Press Esc or Enter to close",
        },
    },

    feedback: FeedbackTexts {
        created: "Customer created successfully!",
        updated: "Customer updated successfully!",
        unchanged: "No changes to save",
        deleted: "Customer deleted successfully!",
        create_failed: "Failed to create customer",
        update_failed: "Failed to update customer",
        delete_failed: "Failed to delete customer",
        load_failed: "Failed to load customer",
        list_failed: "Failed to load customers",
        not_found: "Customer not found",
        network: "Could not reach the server",
        validation: "The server rejected the data",
        settings_saved: "Settings saved",
        settings_failed: "Failed to save settings",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        list_shortcuts: "Customer list",
        form_shortcuts: "Customer form",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move up/down",
            confirm: "Confirm",
            back_cancel: "Back/Cancel",
            refresh: "Refresh",
            quit: "Quit",
            search: "Search",
            change_page: "Previous/next page",
            add: "New customer",
            edit: "Edit customer",
            delete: "Delete customer",
            save: "Save",
            next_field: "Next/previous field",
            toggle: "Toggle option",
        },
    },
};
