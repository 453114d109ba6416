#[rustfmt::skip]
pub use super::{
    air_conditioner::{
        ActiveModel as AirConditionerActiveModel, Column as AirConditionerColumn,
        Entity as AirConditionerEntity, Model as AirConditionerModel,
    },
    customer::{
        ActiveModel as CustomerActiveModel, Column as CustomerColumn,
        Entity as CustomerEntity, Model as CustomerModel,
    },
    photo::{
        ActiveModel as PhotoActiveModel, Column as PhotoColumn,
        Entity as PhotoEntity, Model as PhotoModel,
    },
    property::{
        ActiveModel as PropertyActiveModel, Column as PropertyColumn,
        Entity as PropertyEntity, Model as PropertyModel,
    },
    report::{
        ActiveModel as ReportActiveModel, Column as ReportColumn,
        Entity as ReportEntity, Model as ReportModel,
    },
    schedule::{
        ActiveModel as ScheduleActiveModel, Column as ScheduleColumn,
        Entity as ScheduleEntity, Model as ScheduleModel,
    },
    user::{
        ActiveModel as UserActiveModel, Column as UserColumn,
        Entity as UserEntity, Model as UserModel,
    },
    work_detail::{
        ActiveModel as WorkDetailActiveModel, Column as WorkDetailColumn,
        Entity as WorkDetailEntity, Model as WorkDetailModel,
    },
    work_item::{
        ActiveModel as WorkItemActiveModel, Column as WorkItemColumn,
        Entity as WorkItemEntity, Model as WorkItemModel,
    },
    work_time::{
        ActiveModel as WorkTimeActiveModel, Column as WorkTimeColumn,
        Entity as WorkTimeEntity, Model as WorkTimeModel,
    },
};
