//! 葡萄牙语（巴西）翻译 (pt-BR)

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
        app_name: "Painel de Clientes",
        add: "Adicionar",
        edit: "Editar",
        delete: "Excluir",
        cancel: "Cancelar",
        save: "Salvar",
        confirm: "Confirmar",
        close: "Fechar",
        loading: "Carregando...",
        no_data: "Sem dados",
        error: "Erro",
        yes: "Sim",
        no: "Não",
        page: "Página",
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
            space: "Espaço",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            slash: "/",
        },
        actions: ActionTexts {
            navigate: "Navegar",
            select: "Selecionar",
            open: "Abrir",
            switch_panel: "Trocar painel",
            switch_option: "Alternar",
            change_page: "Página",
            search: "Buscar",
            apply: "Aplicar",
            next_field: "Próximo campo",
            toggle: "Alternar",
            back: "Voltar",
            quit: "Sair",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Início",
        customers: "Clientes",
        settings: "Configurações",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "Bem-vindo ao Painel de Clientes",
        welcome_desc: "Liste, filtre, cadastre, edite e exclua clientes",
        connection: "Conexão",
        api_endpoint: "Endereço da API",
        page_size: "Linhas por página",
        get_started: "Abra Clientes no menu para começar",
    },

    customers: CustomersTexts {
        title: "Clientes",
        filter_by: "Filtrar por",
        search_placeholder: "Pressione / para buscar",
        no_customers: "Nenhum cliente encontrado",
        add_customer_hint: "Pressione Alt+a para cadastrar um cliente",
        date_format: "%d/%m/%Y",
        columns: CustomerColumns {
            id: "ID",
            name: "Nome",
            email: "E-mail",
            phone: "Telefone",
            address: "Endereço",
            updated_at: "Atualizado",
        },
        attributes: FilterAttributeTexts {
            name: "Nome",
            cpf: "CPF",
            business_name: "Razão Social",
            cnpj: "CNPJ",
            identity_document: "Doc. Identidade",
        },
    },

    detail: DetailTexts {
        title: "Detalhes do Cliente",
        loading: "Carregando cliente...",
        unavailable: "Não foi possível carregar o cliente (Alt+r para tentar novamente)",
        personal_info: "Informações Pessoais",
        address: "Endereço",
        correspondence_address: "Endereço de Correspondência",
        phone_contacts: "Telefones",
        email_contacts: "E-mails",
        no_contacts: "Nenhum",
        editing: "Editando",
        saving: "Salvando...",
        deleting: "Excluindo...",
        last_updated: "Última atualização",
    },

    fields: FieldLabels {
        customer_type: "Tipo de cliente",
        individual: "Pessoa Física (PF)",
        business: "Pessoa Jurídica (PJ)",
        name: "Nome",
        cpf: "CPF",
        birth_date: "Data de nascimento",
        mother_name: "Nome da mãe",
        business_name: "Razão Social",
        cnpj: "CNPJ",
        identity_document: "Doc. Identidade",
        issuing_agency: "Órgão emissor",
        zip_code: "CEP",
        street: "Rua",
        number: "Número",
        neighborhood: "Bairro",
        complement: "Complemento",
        city: "Cidade",
        state: "Estado",
        country: "País",
        address_type: "Tipo de endereço",
        has_multiple_units: "Possui várias unidades",
        use_correspondence_address: "Usar endereço de correspondência",
        phone: "Telefone",
        email: "E-mail",
        contact_name: "Nome do contato",
        is_whatsapp: "WhatsApp",
        add_phone: "+ Adicionar telefone",
        add_email: "+ Adicionar e-mail",
    },

    settings: SettingsTexts {
        title: "Configurações",
        language: "Idioma",
        page_size: "Linhas por página",
        api_endpoint: "Endereço da API",
        saved_hint: "As alterações são salvas no arquivo de configuração",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        new_customer: NewCustomerTexts {
            title: "Novo Cliente",
            submitting: "Cadastrando cliente...",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirmar Exclusão",
            message: "Tem certeza de que deseja excluir este cliente?",
            confirm_button: "Excluir",
            cancel_button: "Cancelar",
        },
        feedback: FeedbackModalTexts {
            success_title: "Sucesso",
            error_title: "Erro",
            close_hint: "Pressione Esc ou Enter para fechar",
        },
    },

    feedback: FeedbackTexts {
        created: "Cliente cadastrado com sucesso!",
        updated: "Cliente atualizado com sucesso!",
        unchanged: "Nenhuma alteração para salvar",
        deleted: "Cliente excluído com sucesso!",
        create_failed: "Erro ao cadastrar cliente.",
        update_failed: "Erro ao atualizar cliente.",
        delete_failed: "Erro ao excluir cliente.",
        load_failed: "Erro ao carregar cliente.",
        list_failed: "Erro ao carregar clientes.",
        not_found: "Cliente não encontrado",
        network: "Não foi possível conectar ao servidor",
        validation: "O servidor rejeitou os dados",
        settings_saved: "Configurações salvas",
        settings_failed: "Erro ao salvar configurações",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Ajuda",
        global_shortcuts: "Atalhos globais",
        list_shortcuts: "Lista de clientes",
        form_shortcuts: "Formulário de cliente",
        close_hint: "Pressione Esc para fechar a ajuda",
        actions: HelpActionTexts {
            switch_panel: "Trocar painel",
            move_up_down: "Mover para cima/baixo",
            confirm: "Confirmar",
            back_cancel: "Voltar/Cancelar",
            refresh: "Atualizar",
            quit: "Sair",
            search: "Buscar",
            change_page: "Página anterior/seguinte",
            add: "Novo cliente",
            edit: "Editar cadastro",
            delete: "Excluir cadastro",
            save: "Salvar",
            next_field: "Próximo/anterior campo",
            toggle: "Alternar opção",
        },
    },
};
