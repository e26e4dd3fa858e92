//! 客户列表页面状态

use chrono::{Local, NaiveDate};
use customer_dashboard_client::{
    Customer, CustomerFilter, CustomerId, CustomerPage, CustomerQuery, FilterAttribute,
};

/// 列表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// "street, city, state, country"
    pub address: String,
    pub updated_on: Option<NaiveDate>,
}

impl CustomerRow {
    /// 没有 id 的客户无法打开详情，返回 None
    pub fn from_customer(customer: &Customer) -> Option<Self> {
        Some(Self {
            id: customer.id?,
            name: customer.name.clone(),
            email: customer.primary_email().unwrap_or_default().to_string(),
            phone: customer.primary_phone().unwrap_or_default().to_string(),
            address: customer.address.summary(),
            updated_on: customer
                .updated_at
                .map(|at| at.with_timezone(&Local).date_naive()),
        })
    }
}

/// 客户列表页面状态
#[derive(Debug)]
pub struct CustomersState {
    /// 当前页的行
    pub rows: Vec<CustomerRow>,
    /// 当前选中的索引
    pub selected: usize,
    /// 当前页（从 0 开始，请求时加 1）
    pub page: u32,
    pub page_size: u32,
    /// 过滤后的总数
    pub total: u32,
    pub total_pages: u32,

    /// 搜索框选中的属性
    pub filter_attribute: FilterAttribute,
    /// 搜索框内容
    pub search_input: String,
    /// 已应用的过滤
    pub active_filter: Option<CustomerFilter>,
    /// 搜索框是否获得输入焦点
    pub search_focused: bool,

    /// 是否正在加载
    pub loading: bool,
    /// 加载期间又有新的请求
    pub reload_queued: bool,
    /// 错误信息
    pub error: Option<String>,
}

impl CustomersState {
    pub fn new(page_size: u32) -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            page: 0,
            page_size: page_size.max(1),
            total: 0,
            total_pages: 0,
            filter_attribute: FilterAttribute::Name,
            search_input: String::new(),
            active_filter: None,
            search_focused: false,
            loading: false,
            reload_queued: false,
            error: None,
        }
    }

    /// 当前页面对应的请求
    pub fn query(&self) -> CustomerQuery {
        CustomerQuery {
            filter: self.active_filter.clone(),
            customer_type: None,
            page: self.page + 1,
            limit: self.page_size,
        }
    }

    /// 请求加载当前页
    ///
    /// 已有请求在途时只做标记，返回 None；请求返回后再补发。
    pub fn request_load(&mut self) -> Option<CustomerQuery> {
        if self.loading {
            self.reload_queued = true;
            return None;
        }
        self.loading = true;
        Some(self.query())
    }

    /// 记录加载结果，返回需要补发的请求
    pub fn finish_load(&mut self, page: CustomerPage, error: Option<String>) -> Option<CustomerQuery> {
        self.loading = false;
        self.rows = page.customers.iter().filter_map(CustomerRow::from_customer).collect();
        self.total = page.total;
        self.total_pages = page.total_pages;
        self.error = error;
        self.clamp_selection();

        if std::mem::take(&mut self.reload_queued) {
            return self.request_load();
        }
        None
    }

    /// 改变每页行数并回到第一页
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    // ========== 分页 ==========

    /// 下一页；已是最后一页时返回 false
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 >= self.total_pages {
            return false;
        }
        self.page += 1;
        self.selected = 0;
        true
    }

    /// 上一页；已是第一页时返回 false
    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        self.selected = 0;
        true
    }

    // ========== 搜索 ==========

    pub fn cycle_attribute(&mut self, forward: bool) {
        let all = FilterAttribute::ALL;
        let current = all
            .iter()
            .position(|a| *a == self.filter_attribute)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % all.len()
        } else {
            (current + all.len() - 1) % all.len()
        };
        self.filter_attribute = all[next];
    }

    /// 应用搜索框中的过滤并回到第一页
    ///
    /// 空白输入清除过滤。
    pub fn apply_filter(&mut self) {
        let filter = CustomerFilter::new(self.filter_attribute, self.search_input.trim());
        self.active_filter = if filter.is_blank() { None } else { Some(filter) };
        self.search_focused = false;
        self.page = 0;
        self.selected = 0;
    }

    /// 退出搜索输入，恢复为已应用的过滤
    pub fn cancel_search(&mut self) {
        self.search_focused = false;
        match &self.active_filter {
            Some(filter) => {
                self.filter_attribute = filter.attribute;
                self.search_input.clone_from(&filter.value);
            }
            None => self.search_input.clear(),
        }
    }

    // ========== 选择 ==========

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected < self.rows.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    pub fn selected_row(&self) -> Option<&CustomerRow> {
        self.rows.get(self.selected)
    }

    pub fn selected_id(&self) -> Option<CustomerId> {
        self.selected_row().map(|row| row.id)
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }
}
